mod integration;
mod parsing;
