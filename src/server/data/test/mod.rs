mod admin;
mod category;
mod club;
mod document;
mod institution;
mod user;
