pub mod window;

pub mod randomizer;
