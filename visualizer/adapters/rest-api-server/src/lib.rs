pub use server::run;

mod page;
mod server;
