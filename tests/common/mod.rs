//! Shared test fixtures
//!
//! Builds the sample Brazilian-league dataset through the public upsert
//! API, the same way an ingestion collaborator would: nodes first, then
//! edges, so no edge ever references a missing endpoint.

#![allow(dead_code)]

use chrono::NaiveDate;
use ginga::{attrs, AttrValue, EdgeType, GraphEngine, NodeType};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn opt_date(ymd: Option<(i32, u32, u32)>) -> AttrValue {
    ymd.map(|(y, m, d)| date(y, m, d)).into()
}

pub fn team(
    engine: &GraphEngine,
    id: &str,
    name: &str,
    city: &str,
    stadium: &str,
    founded_year: i64,
    colors: &str,
) {
    engine
        .upsert_node(
            NodeType::Team,
            id,
            attrs([
                ("name", name.into()),
                ("city", city.into()),
                ("stadium", stadium.into()),
                ("founded_year", founded_year.into()),
                ("colors", colors.into()),
            ]),
        )
        .expect("team upsert");
}

pub fn player(
    engine: &GraphEngine,
    id: &str,
    name: &str,
    birth: (i32, u32, u32),
    nationality: &str,
    position: &str,
    jersey_number: i64,
) {
    engine
        .upsert_node(
            NodeType::Player,
            id,
            attrs([
                ("name", name.into()),
                ("birth_date", date(birth.0, birth.1, birth.2).into()),
                ("nationality", nationality.into()),
                ("position", position.into()),
                ("jersey_number", jersey_number.into()),
            ]),
        )
        .expect("player upsert");
}

pub fn competition(engine: &GraphEngine, id: &str, name: &str, season: &str, kind: &str) {
    engine
        .upsert_node(
            NodeType::Competition,
            id,
            attrs([
                ("name", name.into()),
                ("season", season.into()),
                ("type", kind.into()),
                ("tier", 1i64.into()),
            ]),
        )
        .expect("competition upsert");
}

pub fn stadium(engine: &GraphEngine, id: &str, name: &str, city: &str, capacity: i64) {
    engine
        .upsert_node(
            NodeType::Stadium,
            id,
            attrs([
                ("name", name.into()),
                ("city", city.into()),
                ("capacity", capacity.into()),
            ]),
        )
        .expect("stadium upsert");
}

pub fn coach(engine: &GraphEngine, id: &str, name: &str, nationality: &str) {
    engine
        .upsert_node(
            NodeType::Coach,
            id,
            attrs([("name", name.into()), ("nationality", nationality.into())]),
        )
        .expect("coach upsert");
}

/// Match node plus its PLAYED_HOME, PLAYED_AWAY, and PART_OF edges
pub fn game(
    engine: &GraphEngine,
    id: &str,
    day: (i32, u32, u32),
    home: &str,
    away: &str,
    home_score: i64,
    away_score: i64,
    competition_id: &str,
    attendance: i64,
) {
    engine
        .upsert_node(
            NodeType::Match,
            id,
            attrs([
                ("date", date(day.0, day.1, day.2).into()),
                ("home_score", home_score.into()),
                ("away_score", away_score.into()),
                ("attendance", attendance.into()),
            ]),
        )
        .expect("match upsert");
    engine
        .upsert_edge(EdgeType::PlayedHome, home, id, attrs([]))
        .expect("home edge");
    engine
        .upsert_edge(EdgeType::PlayedAway, away, id, attrs([]))
        .expect("away edge");
    engine
        .upsert_edge(EdgeType::PartOf, id, competition_id, attrs([]))
        .expect("part_of edge");
}

pub fn contract(
    engine: &GraphEngine,
    player_id: &str,
    team_id: &str,
    start: (i32, u32, u32),
    end: Option<(i32, u32, u32)>,
) {
    engine
        .upsert_edge(
            EdgeType::PlaysFor,
            player_id,
            team_id,
            attrs([
                ("start_date", date(start.0, start.1, start.2).into()),
                ("end_date", opt_date(end)),
            ]),
        )
        .expect("contract upsert");
}

pub fn goal(engine: &GraphEngine, player_id: &str, match_id: &str, minute: i64, goal_type: &str) {
    engine
        .upsert_edge(
            EdgeType::ScoredIn,
            player_id,
            match_id,
            attrs([("minute", minute.into()), ("goal_type", goal_type.into())]),
        )
        .expect("goal upsert");
}

pub fn card(engine: &GraphEngine, player_id: &str, match_id: &str, minute: i64, red: bool) {
    let edge_type = if red {
        EdgeType::RedCardIn
    } else {
        EdgeType::YellowCardIn
    };
    engine
        .upsert_edge(edge_type, player_id, match_id, attrs([("minute", minute.into())]))
        .expect("card upsert");
}

/// Engine populated with the sample Brazilian-league dataset
pub fn sample_engine() -> GraphEngine {
    init_tracing();
    let engine = GraphEngine::new();

    team(&engine, "T001", "Flamengo", "Rio de Janeiro", "Maracanã", 1895, "Red and Black");
    team(&engine, "T002", "Fluminense", "Rio de Janeiro", "Maracanã", 1902, "Maroon, Green and White");
    team(&engine, "T003", "Corinthians", "São Paulo", "Neo Química Arena", 1910, "Black and White");
    team(&engine, "T004", "Palmeiras", "São Paulo", "Allianz Parque", 1914, "Green and White");
    team(&engine, "T005", "Santos", "Santos", "Vila Belmiro", 1912, "Black and White");
    team(&engine, "T006", "São Paulo FC", "São Paulo", "Morumbi", 1930, "Red, White and Black");
    team(&engine, "T007", "Grêmio", "Porto Alegre", "Arena do Grêmio", 1903, "Blue, Black and White");
    team(&engine, "T008", "Internacional", "Porto Alegre", "Beira-Rio", 1909, "Red and White");
    team(&engine, "T009", "Cruzeiro", "Belo Horizonte", "Mineirão", 1921, "Blue and White");
    team(&engine, "T010", "Atlético Mineiro", "Belo Horizonte", "Mineirão", 1908, "Black and White");
    team(&engine, "T011", "Botafogo", "Rio de Janeiro", "Nilton Santos", 1904, "Black and White");
    team(&engine, "T012", "Vasco da Gama", "Rio de Janeiro", "São Januário", 1898, "Black and White");

    stadium(&engine, "S001", "Maracanã", "Rio de Janeiro", 78838);
    stadium(&engine, "S002", "Neo Química Arena", "São Paulo", 49205);
    stadium(&engine, "S003", "Allianz Parque", "São Paulo", 43713);

    competition(&engine, "C001", "Campeonato Brasileiro Série A", "2023", "league");
    competition(&engine, "C002", "Campeonato Brasileiro Série A", "2022", "league");
    competition(&engine, "C003", "Copa do Brasil", "2023", "cup");
    competition(&engine, "C004", "Copa do Brasil", "2022", "cup");
    competition(&engine, "C005", "Campeonato Brasileiro Série A", "2024", "league");

    player(&engine, "P001", "Gabriel Barbosa (Gabigol)", (1996, 8, 30), "Brazilian", "Forward", 10);
    player(&engine, "P002", "Pedro", (1997, 6, 20), "Brazilian", "Forward", 9);
    player(&engine, "P003", "Arrascaeta", (1994, 6, 1), "Uruguayan", "Midfielder", 14);
    player(&engine, "P004", "Everton Ribeiro", (1989, 4, 10), "Brazilian", "Midfielder", 7);
    player(&engine, "P005", "Endrick", (2006, 7, 21), "Brazilian", "Forward", 9);
    player(&engine, "P006", "Raphael Veiga", (1995, 6, 19), "Brazilian", "Midfielder", 23);
    player(&engine, "P007", "Dudu", (1992, 1, 7), "Brazilian", "Forward", 7);
    player(&engine, "P008", "Yuri Alberto", (2001, 3, 18), "Brazilian", "Forward", 9);
    player(&engine, "P009", "Renato Augusto", (1988, 2, 8), "Brazilian", "Midfielder", 8);
    player(&engine, "P010", "Pelé", (1940, 10, 23), "Brazilian", "Forward", 10);
    player(&engine, "P011", "Neymar Jr", (1992, 2, 5), "Brazilian", "Forward", 11);
    player(&engine, "P012", "Ronaldo Nazário", (1976, 9, 18), "Brazilian", "Forward", 9);
    player(&engine, "P013", "Romário", (1966, 1, 29), "Brazilian", "Forward", 11);
    player(&engine, "P014", "Zico", (1953, 3, 3), "Brazilian", "Midfielder", 10);
    player(&engine, "P015", "Ronaldinho", (1980, 3, 21), "Brazilian", "Forward", 10);
    player(&engine, "P016", "Germán Cano", (1988, 1, 7), "Argentine", "Forward", 14);
    player(&engine, "P017", "Ganso", (1989, 10, 12), "Brazilian", "Midfielder", 10);
    player(&engine, "P018", "Luciano", (1993, 5, 18), "Brazilian", "Forward", 10);
    player(&engine, "P019", "Calleri", (1993, 7, 23), "Argentine", "Forward", 9);
    player(&engine, "P020", "Tiquinho Soares", (1991, 1, 17), "Brazilian", "Forward", 9);

    coach(&engine, "CO001", "Tite", "Brazilian");
    coach(&engine, "CO002", "Jorge Jesus", "Portuguese");

    game(&engine, "M001", (2023, 4, 16), "T001", "T002", 2, 1, "C001", 65000);
    game(&engine, "M002", (2023, 5, 21), "T003", "T004", 1, 1, "C001", 45000);
    game(&engine, "M003", (2023, 6, 10), "T005", "T006", 0, 2, "C001", 14000);
    game(&engine, "M004", (2023, 7, 8), "T007", "T008", 2, 0, "C001", 50000);
    game(&engine, "M005", (2023, 8, 12), "T001", "T004", 3, 2, "C001", 70000);
    game(&engine, "M006", (2023, 9, 3), "T002", "T001", 0, 3, "C001", 60000);
    game(&engine, "M007", (2023, 10, 15), "T003", "T001", 1, 2, "C001", 47000);
    game(&engine, "M008", (2023, 11, 5), "T004", "T003", 2, 0, "C001", 40000);
    game(&engine, "M009", (2023, 11, 20), "T001", "T003", 2, 1, "C001", 68000);
    game(&engine, "M010", (2023, 12, 3), "T011", "T012", 1, 0, "C001", 35000);
    game(&engine, "M011", (2022, 4, 10), "T001", "T002", 1, 0, "C002", 55000);
    game(&engine, "M012", (2022, 5, 15), "T004", "T003", 3, 0, "C002", 42000);
    game(&engine, "M013", (2022, 8, 20), "T002", "T001", 2, 2, "C002", 58000);
    game(&engine, "M014", (2023, 5, 10), "T001", "T005", 4, 0, "C003", 52000);
    game(&engine, "M015", (2023, 8, 23), "T006", "T001", 1, 2, "C003", 45000);
    game(&engine, "M016", (2024, 4, 14), "T001", "T002", 2, 1, "C005", 66000);
    game(&engine, "M017", (2024, 5, 19), "T003", "T004", 0, 1, "C005", 43000);
    game(&engine, "M018", (2024, 7, 7), "T011", "T001", 2, 2, "C005", 40000);
    game(&engine, "M019", (2024, 9, 15), "T004", "T001", 1, 3, "C005", 41000);
    game(&engine, "M020", (2024, 10, 20), "T002", "T001", 0, 1, "C005", 62000);

    contract(&engine, "P001", "T001", (2019, 1, 1), None);
    contract(&engine, "P002", "T001", (2020, 1, 1), None);
    contract(&engine, "P003", "T001", (2019, 1, 1), None);
    contract(&engine, "P004", "T001", (2017, 1, 1), Some((2023, 12, 31)));
    contract(&engine, "P014", "T001", (1971, 1, 1), Some((1983, 12, 31)));
    contract(&engine, "P005", "T004", (2022, 1, 1), Some((2024, 6, 30)));
    contract(&engine, "P006", "T004", (2019, 1, 1), None);
    contract(&engine, "P007", "T004", (2015, 1, 1), None);
    contract(&engine, "P008", "T003", (2022, 1, 1), None);
    contract(&engine, "P009", "T003", (2022, 1, 1), None);
    contract(&engine, "P012", "T003", (2009, 1, 1), Some((2011, 12, 31)));
    contract(&engine, "P010", "T005", (1956, 1, 1), Some((1974, 12, 31)));
    contract(&engine, "P011", "T005", (2009, 1, 1), Some((2013, 5, 31)));
    contract(&engine, "P011", "T001", (2025, 1, 1), None);
    contract(&engine, "P012", "T009", (1993, 1, 1), Some((1994, 5, 31)));
    contract(&engine, "P013", "T012", (1985, 1, 1), Some((1988, 12, 31)));
    contract(&engine, "P013", "T001", (1995, 1, 1), Some((1999, 12, 31)));
    contract(&engine, "P015", "T007", (1998, 1, 1), Some((2001, 12, 31)));
    contract(&engine, "P015", "T010", (2012, 1, 1), Some((2014, 12, 31)));
    contract(&engine, "P015", "T001", (2011, 1, 1), Some((2012, 6, 30)));
    contract(&engine, "P016", "T002", (2022, 1, 1), None);
    contract(&engine, "P017", "T002", (2019, 1, 1), None);
    contract(&engine, "P017", "T005", (2008, 1, 1), Some((2012, 12, 31)));
    contract(&engine, "P018", "T006", (2020, 1, 1), None);
    contract(&engine, "P019", "T006", (2022, 1, 1), None);
    contract(&engine, "P020", "T011", (2023, 1, 1), None);

    goal(&engine, "P001", "M001", 23, "regular");
    goal(&engine, "P002", "M001", 67, "penalty");
    goal(&engine, "P016", "M001", 45, "regular");
    goal(&engine, "P008", "M002", 34, "regular");
    goal(&engine, "P006", "M002", 78, "free_kick");
    goal(&engine, "P001", "M005", 12, "regular");
    goal(&engine, "P002", "M005", 55, "regular");
    goal(&engine, "P003", "M005", 89, "regular");
    goal(&engine, "P005", "M005", 30, "regular");
    goal(&engine, "P007", "M005", 72, "regular");
    goal(&engine, "P001", "M006", 15, "regular");
    goal(&engine, "P002", "M006", 82, "regular");
    goal(&engine, "P001", "M014", 10, "regular");
    goal(&engine, "P002", "M014", 35, "regular");
    goal(&engine, "P003", "M014", 60, "regular");
    goal(&engine, "P001", "M016", 25, "regular");
    goal(&engine, "P003", "M016", 70, "regular");
    goal(&engine, "P016", "M016", 85, "regular");
    goal(&engine, "P006", "M017", 65, "regular");
    goal(&engine, "P020", "M018", 30, "regular");
    goal(&engine, "P001", "M018", 55, "regular");
    goal(&engine, "P002", "M019", 20, "regular");
    goal(&engine, "P001", "M019", 45, "penalty");
    goal(&engine, "P003", "M019", 78, "regular");
    goal(&engine, "P007", "M019", 90, "regular");
    goal(&engine, "P002", "M020", 62, "regular");

    card(&engine, "P008", "M002", 45, false);
    card(&engine, "P007", "M002", 60, false);
    card(&engine, "P003", "M005", 70, false);
    card(&engine, "P006", "M008", 55, false);
    card(&engine, "P009", "M008", 78, true);
    card(&engine, "P016", "M001", 88, false);
    card(&engine, "P001", "M007", 40, false);

    engine
}
