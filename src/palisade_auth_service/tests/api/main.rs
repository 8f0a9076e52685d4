mod helpers;
mod login;
mod register;
