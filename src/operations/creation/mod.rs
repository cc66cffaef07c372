mod generate_boundary;
mod generate_coil;

pub use generate_boundary::GenerateBoundary;
pub use generate_coil::GenerateCoil;
