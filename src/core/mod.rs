pub mod ballistics;
pub mod frame;
pub mod launch;
pub mod plot;
pub mod projectile;
pub mod simulation;
pub mod trace;
pub mod window;
pub mod world;
