fn main() -> Result<(), Box<dyn std::error::Error>> {
    warehouse_chat::cli::main()
}
