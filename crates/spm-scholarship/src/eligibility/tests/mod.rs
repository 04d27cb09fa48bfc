mod catalog;
mod common;
mod intake;
mod profile;
mod routing;
