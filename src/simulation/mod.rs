pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod rotating_frame;
pub mod scenario;
pub mod sweep;
