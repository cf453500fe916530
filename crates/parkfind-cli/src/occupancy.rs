use parkfind_occupancy::OccupancyRequest;

pub(crate) fn run_occupancy(
    cost: f64,
    distance: f64,
    spots: i64,
    hour: Option<i64>,
) -> anyhow::Result<()> {
    let request = OccupancyRequest {
        cost,
        distance,
        spots,
        hour,
    };
    let report = request.assess()?;
    crate::print_json(&report)
}
