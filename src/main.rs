fn main() {
    wpgen::app::cli::run();
}
