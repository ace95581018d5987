mod checks;
mod security_headers;
