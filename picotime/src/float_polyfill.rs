#[allow(unused)] // clippy will inaccurately mark this as unused on platforms with std
pub(crate) trait FloatPolyfill {
    #[cfg(not(feature = "std"))]
    fn trunc(self) -> Self;
    #[cfg(not(feature = "std"))]
    fn fract(self) -> Self;
}

impl FloatPolyfill for f64 {
    #[cfg(not(feature = "std"))]
    fn trunc(self) -> Self {
        libm::trunc(self)
    }

    #[cfg(not(feature = "std"))]
    fn fract(self) -> Self {
        self - libm::trunc(self)
    }
}
