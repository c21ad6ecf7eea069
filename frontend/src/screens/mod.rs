mod landing;
mod login;
mod signup;

pub use landing::LandingScreen;
pub use login::LoginScreen;
pub use signup::SignupScreen;
