fn main() {
    persona_cli::main();
}
