use clap::Parser;

/// Print the tensorcraft GraphQL schema (Model nodes and the node query) as SDL.
#[derive(Parser)]
struct Options;

fn main() {
    model::init_logging();
    Options::parse();
    println!("{}", model::schema::generate().sdl());
}
