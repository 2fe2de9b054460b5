use correlation_factory::{calculate_correlation_stats, generate_correlation_params, generate_metric_data, hash_string};

fn main() {
    let correlation_id = "coffee";
    println!("# Conformance fixtures for correlation id: {}", correlation_id);
    println!("hash,{},{}", correlation_id, hash_string(correlation_id));

    let params = generate_correlation_params(correlation_id);
    println!("# Format: field,value");
    println!("correlationStrength,{:?}", params.correlation_strength);
    println!("metricPairIndex,{}", params.metric_pair_index);
    println!("captionIndex,{}", params.caption_index);
    println!("rSquared,{:?}", params.r_squared);
    println!("baseValueA,{:?}", params.base_value_a);
    println!("rangeA,{:?}", params.range_a);
    println!("baseValueB,{:?}", params.base_value_b);
    println!("rangeB,{:?}", params.range_b);
    println!("trendDirection,{}", params.trend_direction);

    let series = [("blue", true), ("quiet", false)];
    let mut generated = Vec::new();
    for (seed, is_primary) in series.iter() {
        let data = generate_metric_data(seed, &params, *is_primary, 10);
        let values: Vec<String> = data.iter().map(|p| format!("{:.2}", p.value)).collect();
        println!("series,{},{},{}", seed, is_primary, values.join(","));
        generated.push(data);
    }

    match calculate_correlation_stats(&generated[0], &generated[1]) {
        Ok(stats) => println!("stats,{},{}", stats.r_squared, stats.p_value),
        Err(e) => eprintln!("Error computing stats: {}", e),
    }
}
