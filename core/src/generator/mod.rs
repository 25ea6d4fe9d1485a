use crate::*;
pub use random::*;

mod random;

pub trait TargetGenerator {
    fn generate(self, config: GridConfig) -> TargetLayout;
}
