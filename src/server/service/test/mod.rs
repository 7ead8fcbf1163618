mod account;
mod category;
mod club;
mod document;
mod institution;
mod lecture;
mod school;
mod student;
