pub mod classic;
pub mod home;
pub mod mystery;
pub mod not_found;
pub mod terms;
