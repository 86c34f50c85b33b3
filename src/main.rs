fn main() {
    ansible_bootstrap::app::cli::run();
}
