#![no_std]

pub mod arithmetic;
pub mod sale_math;

pub use arithmetic::*;
pub use sale_math::*;
