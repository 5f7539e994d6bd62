fn main() {
    #[cfg(feature = "csr")]
    client::start();
}
