//! Component storage shared by every color model.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional components are stored as.
pub type Component = f64;

/// Three fractional components of a color, the working representation while
/// converting between color spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}
