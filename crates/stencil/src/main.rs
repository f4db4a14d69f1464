fn main() {
    stencil_cli::run_main();
}
