mod lifecycle;
mod samples;
