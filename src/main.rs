fn main() {
    rehome::run_cli();
}
