mod mapping;

pub use mapping::to_devanagari;
