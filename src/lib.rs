#![allow(unused)]

#[macro_use]
extern crate log;

pub mod bbox;
pub mod geometry;
pub mod grid;
pub mod lsystem;
pub mod params;
pub mod primitive;
pub mod ray;
pub mod shape;
pub mod transform;
pub mod utils;
