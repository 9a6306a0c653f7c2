mod args;
mod fixtures;
mod graph_file;
mod report;
