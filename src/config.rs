//! Shared configuration for iterative routines.
//!
//! Provides [`CommonCfg`] with a convergence tolerance and an optional
//! iteration cap, used by every solver and series config.
//!
//! [`CommonCfg`] : universal fields
//! ├ `eps`      : convergence tolerance (finite, > 0)
//! └ `max_iter` : iteration cap (optional)
//!
//! Each config picks its own default `eps` through [`CommonCfg::with_default_eps`].
//! When `max_iter` is unset the routine resolves a cap from its algorithm.
//! Routines whose natural tolerance depends on the input magnitude may
//! rescale a default `eps`; one set through `set_eps` is used as given.


#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct CommonCfg {
    eps:      f64,
    eps_set:  bool,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub(crate) const fn with_default_eps(eps: f64) -> Self {
        Self { eps, eps_set: false, max_iter: None }
    }

    // getters
    pub(crate) fn eps(&self)      -> f64 { self.eps }
    pub(crate) fn max_iter(&self) -> Option<usize> { self.max_iter }
    pub(crate) fn eps_is_default(&self) -> bool { !self.eps_set }

    // setters (internal)
    pub(crate) fn with_eps      (&mut self, v: f64)   { self.eps = v; self.eps_set = true; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            /// Sets the convergence tolerance.
            ///
            /// # Errors
            /// - [`DomainError::InvalidTolerance`](crate::errors::DomainError::InvalidTolerance)
            ///   if `v` is non-finite or `<= 0`.
            pub fn set_eps(
                mut self, v: f64
            ) -> Result<Self, $crate::errors::DomainError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::errors::DomainError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_eps(v);
                Ok(self)
            }

            /// Sets the iteration cap.
            ///
            /// # Errors
            /// - [`DomainError::InvalidMaxIter`](crate::errors::DomainError::InvalidMaxIter)
            ///   if `v == 0`.
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::errors::DomainError> {
                if v == 0 {
                    return Err(
                        $crate::errors::DomainError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn eps(&self) -> f64 { self.common.eps() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;
