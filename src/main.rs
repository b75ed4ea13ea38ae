use foldgen::cli;

fn main() {
    cli::run();
}
