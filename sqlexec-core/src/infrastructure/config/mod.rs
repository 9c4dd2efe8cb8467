pub mod profiles;

pub use profiles::{OutputConfig, ProfilesFile, find_profiles_file, load_profiles};
