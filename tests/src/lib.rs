mod chart {
    mod integration;
}
