pub const INDEX: &str = "/";
