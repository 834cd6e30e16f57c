fn main() {
    svcopen::app::cli::run();
}
