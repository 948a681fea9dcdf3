#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RenderError {
    #[error("percent {0} is outside of the range [0.0, 1.0]")]
    InvalidPercent(f32),

    #[error("{0} contains a non-finite coordinate")]
    NonFinitePoint(&'static str),

    #[error("control fraction at index {0} is not finite")]
    NonFiniteFraction(usize),
}
