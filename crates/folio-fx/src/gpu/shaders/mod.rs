mod points;

pub use points::SHADER_POINTS;
