fn main() {
    gasinit::cli::run();
}
