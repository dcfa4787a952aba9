mod bootstrap;
mod sign_in;
