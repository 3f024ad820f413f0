fn main() {
    lai_see_tally::run();
}
