extern crate ini;
#[macro_use]
extern crate lazy_static;

#[cfg(test)]
extern crate rand;

pub mod alg;
pub mod config;
pub mod graphics;
