fn main() {
    emlauncher::cli::main()
}
