pub mod blue_white_gradient;
pub mod hue_cycle;
