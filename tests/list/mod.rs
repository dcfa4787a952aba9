mod fetch;
mod submit;
