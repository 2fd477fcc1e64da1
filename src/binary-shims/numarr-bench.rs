fn main() { numarr_bench::numarr_bench() }
