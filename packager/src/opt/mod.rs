pub mod bisection;
pub mod brute_force;
pub mod filter;
pub mod laff;
pub mod packager;
pub mod policy;
pub mod strategy;
