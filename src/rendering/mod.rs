pub mod ball_visuals;
pub mod palette;
