fn main() {
    hk_trip::start();
}
