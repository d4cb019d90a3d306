pub mod project;

pub use self::project::Project;
