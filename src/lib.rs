pub mod logger;
pub mod maths;

pub mod project
{
    pub const PROJECT_NAME: &str = "raytrace";
    pub const VERSION_MAJOR: u32 = 0;
    pub const VERSION_MINOR: u32 = 1;
}
