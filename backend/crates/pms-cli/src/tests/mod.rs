mod client;
mod diagnose;
