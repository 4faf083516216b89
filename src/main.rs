fn main() {
    selkit::cli::run();
}
