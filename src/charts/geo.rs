//! World Outline Module
//! Compact country outlines for the choropleth map, embedded so the map
//! needs no boundary file at runtime. Coordinates are [longitude, latitude]
//! and deliberately coarse; each region is one or more closed rings.

/// A named country outline.
pub struct Region {
    pub name: &'static str,
    pub rings: &'static [&'static [[f64; 2]]],
}

pub static REGIONS: &[Region] = &[
    Region {
        name: "United States",
        rings: &[&[
            [-124.0, 48.0],
            [-122.0, 49.0],
            [-95.0, 49.0],
            [-88.0, 48.0],
            [-83.0, 45.0],
            [-79.0, 43.0],
            [-75.0, 45.0],
            [-68.0, 47.0],
            [-70.0, 42.0],
            [-74.0, 39.0],
            [-76.0, 35.0],
            [-81.0, 31.0],
            [-80.0, 26.0],
            [-83.0, 29.0],
            [-89.0, 29.0],
            [-94.0, 29.0],
            [-97.0, 26.0],
            [-99.0, 27.0],
            [-104.0, 29.0],
            [-111.0, 31.0],
            [-117.0, 32.0],
            [-120.0, 34.0],
            [-124.0, 40.0],
        ]],
    },
    Region {
        name: "Canada",
        rings: &[&[
            [-141.0, 69.0],
            [-128.0, 70.0],
            [-120.0, 72.0],
            [-110.0, 73.0],
            [-100.0, 74.0],
            [-90.0, 74.0],
            [-82.0, 73.0],
            [-75.0, 72.0],
            [-68.0, 70.0],
            [-62.0, 66.0],
            [-56.0, 62.0],
            [-53.0, 57.0],
            [-56.0, 52.0],
            [-60.0, 50.0],
            [-66.0, 45.0],
            [-71.0, 45.0],
            [-75.0, 45.0],
            [-79.0, 43.0],
            [-83.0, 45.0],
            [-88.0, 48.0],
            [-95.0, 49.0],
            [-122.0, 49.0],
            [-124.0, 50.0],
            [-128.0, 52.0],
            [-132.0, 56.0],
            [-137.0, 59.0],
            [-141.0, 60.0],
        ]],
    },
    Region {
        name: "Mexico",
        rings: &[&[
            [-117.0, 32.0],
            [-111.0, 31.0],
            [-104.0, 29.0],
            [-99.0, 27.0],
            [-97.0, 26.0],
            [-97.0, 22.0],
            [-94.0, 18.0],
            [-91.0, 18.0],
            [-87.0, 21.0],
            [-87.0, 18.0],
            [-92.0, 15.0],
            [-97.0, 16.0],
            [-101.0, 17.0],
            [-105.0, 20.0],
            [-109.0, 23.0],
            [-113.0, 27.0],
            [-115.0, 30.0],
        ]],
    },
    Region {
        name: "Brazil",
        rings: &[&[
            [-70.0, -4.0],
            [-67.0, 0.0],
            [-60.0, 2.0],
            [-56.0, 2.0],
            [-51.0, 4.0],
            [-44.0, -2.0],
            [-35.0, -7.0],
            [-37.0, -11.0],
            [-39.0, -17.0],
            [-41.0, -22.0],
            [-48.0, -25.0],
            [-49.0, -28.0],
            [-53.0, -33.0],
            [-57.0, -30.0],
            [-55.0, -25.0],
            [-58.0, -20.0],
            [-62.0, -16.0],
            [-65.0, -10.0],
            [-70.0, -8.0],
        ]],
    },
    Region {
        name: "Argentina",
        rings: &[&[
            [-68.0, -22.0],
            [-62.0, -22.0],
            [-58.0, -27.0],
            [-58.0, -34.0],
            [-62.0, -39.0],
            [-65.0, -41.0],
            [-65.0, -47.0],
            [-68.0, -52.0],
            [-65.0, -55.0],
            [-68.0, -55.0],
            [-72.0, -50.0],
            [-71.0, -44.0],
            [-70.0, -39.0],
            [-69.0, -33.0],
            [-70.0, -28.0],
            [-68.0, -25.0],
        ]],
    },
    Region {
        name: "Chile",
        rings: &[&[
            [-70.0, -18.0],
            [-71.0, -25.0],
            [-72.0, -33.0],
            [-74.0, -42.0],
            [-75.0, -52.0],
            [-68.0, -55.0],
            [-68.0, -50.0],
            [-69.0, -40.0],
            [-69.0, -30.0],
            [-68.0, -22.0],
        ]],
    },
    Region {
        name: "Colombia",
        rings: &[&[
            [-77.0, 8.0],
            [-75.0, 11.0],
            [-71.0, 12.0],
            [-67.0, 6.0],
            [-67.0, 2.0],
            [-70.0, -4.0],
            [-75.0, 0.0],
            [-79.0, 2.0],
            [-77.0, 4.0],
        ]],
    },
    Region {
        name: "United Kingdom",
        rings: &[&[
            [-5.5, 50.0],
            [-3.0, 51.0],
            [1.5, 51.0],
            [1.8, 53.0],
            [0.0, 54.0],
            [-1.5, 56.0],
            [-2.0, 58.0],
            [-4.0, 58.5],
            [-5.0, 57.0],
            [-4.0, 55.0],
            [-3.0, 54.0],
            [-5.0, 53.0],
            [-4.5, 51.5],
        ]],
    },
    Region {
        name: "Ireland",
        rings: &[&[
            [-10.0, 51.5],
            [-8.0, 51.5],
            [-6.0, 52.0],
            [-6.0, 54.0],
            [-7.0, 55.0],
            [-8.5, 55.0],
            [-10.0, 54.0],
            [-9.5, 53.0],
        ]],
    },
    Region {
        name: "France",
        rings: &[&[
            [-4.5, 48.5],
            [-2.0, 49.5],
            [1.5, 50.8],
            [2.5, 51.0],
            [5.0, 49.5],
            [8.0, 49.0],
            [7.5, 47.5],
            [7.0, 46.0],
            [7.5, 44.0],
            [6.0, 43.0],
            [3.0, 43.0],
            [-1.5, 43.5],
            [-1.0, 45.5],
            [-2.0, 47.0],
            [-4.5, 47.8],
        ]],
    },
    Region {
        name: "Spain",
        rings: &[&[
            [-9.0, 43.5],
            [-2.0, 43.3],
            [3.0, 42.3],
            [0.5, 40.0],
            [-0.5, 38.0],
            [-2.0, 36.8],
            [-5.5, 36.2],
            [-6.5, 37.2],
            [-7.0, 38.0],
            [-7.0, 41.0],
            [-8.0, 42.0],
        ]],
    },
    Region {
        name: "Portugal",
        rings: &[&[
            [-8.8, 42.0],
            [-7.0, 41.8],
            [-7.0, 38.0],
            [-7.5, 37.0],
            [-9.0, 37.0],
            [-8.8, 38.5],
            [-9.5, 39.5],
            [-8.8, 41.0],
        ]],
    },
    Region {
        name: "Germany",
        rings: &[&[
            [6.0, 53.5],
            [8.0, 55.0],
            [11.0, 54.5],
            [14.0, 54.0],
            [15.0, 51.5],
            [12.0, 50.0],
            [13.5, 48.7],
            [10.0, 47.5],
            [7.5, 47.6],
            [6.0, 49.5],
            [6.0, 51.5],
        ]],
    },
    Region {
        name: "Italy",
        rings: &[
            &[
                [7.0, 43.8],
                [9.0, 44.4],
                [12.0, 44.2],
                [13.8, 45.6],
                [12.8, 43.5],
                [14.5, 42.0],
                [16.0, 41.3],
                [18.5, 40.1],
                [17.0, 39.0],
                [16.0, 37.9],
                [15.5, 38.2],
                [14.0, 40.5],
                [11.0, 42.5],
                [8.0, 43.5],
            ],
            &[
                [12.5, 38.0],
                [15.5, 38.2],
                [15.0, 36.7],
                [12.5, 37.5],
            ],
        ],
    },
    Region {
        name: "Netherlands",
        rings: &[&[
            [3.5, 51.4],
            [4.5, 53.0],
            [6.0, 53.5],
            [7.0, 53.3],
            [7.0, 52.0],
            [6.0, 51.8],
            [6.0, 50.8],
            [4.0, 51.4],
        ]],
    },
    Region {
        name: "Belgium",
        rings: &[&[
            [2.5, 51.1],
            [4.5, 51.5],
            [6.0, 50.8],
            [5.7, 49.6],
            [4.5, 49.9],
            [2.8, 50.7],
        ]],
    },
    Region {
        name: "Poland",
        rings: &[&[
            [14.2, 53.9],
            [17.0, 54.8],
            [19.0, 54.4],
            [23.0, 54.0],
            [23.5, 52.0],
            [24.0, 50.5],
            [22.0, 49.2],
            [19.0, 49.4],
            [15.0, 51.0],
            [14.5, 52.5],
        ]],
    },
    Region {
        name: "Turkey",
        rings: &[&[
            [26.0, 40.2],
            [29.0, 41.2],
            [32.0, 42.0],
            [36.0, 42.0],
            [41.0, 41.5],
            [44.0, 40.0],
            [44.5, 37.5],
            [40.0, 37.0],
            [36.0, 36.2],
            [32.0, 36.3],
            [29.0, 36.5],
            [27.0, 36.8],
            [26.0, 38.5],
        ]],
    },
    Region {
        name: "Egypt",
        rings: &[&[
            [25.0, 31.5],
            [30.0, 31.5],
            [32.0, 31.2],
            [34.2, 31.2],
            [34.9, 29.0],
            [34.0, 22.0],
            [25.0, 22.0],
            [25.0, 29.0],
        ]],
    },
    Region {
        name: "Nigeria",
        rings: &[&[
            [2.7, 6.4],
            [2.8, 9.0],
            [3.5, 11.9],
            [6.0, 13.5],
            [10.0, 13.3],
            [13.5, 13.0],
            [14.5, 11.5],
            [14.0, 8.5],
            [12.0, 6.0],
            [8.0, 4.3],
            [5.0, 6.0],
        ]],
    },
    Region {
        name: "South Africa",
        rings: &[&[
            [16.5, -28.5],
            [18.0, -32.0],
            [20.0, -34.5],
            [22.0, -34.2],
            [26.0, -33.8],
            [28.0, -32.5],
            [32.0, -28.5],
            [31.0, -25.5],
            [29.0, -22.2],
            [25.0, -25.5],
            [20.0, -25.0],
        ]],
    },
    Region {
        name: "India",
        rings: &[&[
            [68.5, 23.8],
            [69.0, 28.5],
            [71.0, 32.8],
            [74.0, 34.5],
            [76.0, 34.0],
            [79.0, 32.0],
            [80.0, 30.0],
            [84.0, 27.5],
            [88.0, 27.0],
            [89.0, 26.0],
            [92.0, 27.0],
            [96.0, 29.0],
            [97.0, 28.0],
            [94.0, 25.0],
            [92.0, 22.0],
            [88.0, 21.7],
            [85.0, 19.5],
            [80.0, 15.5],
            [77.0, 8.0],
            [73.0, 15.5],
            [70.0, 20.8],
        ]],
    },
    Region {
        name: "China",
        rings: &[&[
            [74.0, 38.5],
            [80.0, 45.0],
            [87.0, 49.0],
            [97.0, 43.0],
            [105.0, 42.0],
            [111.0, 44.0],
            [117.0, 47.0],
            [121.0, 53.0],
            [127.0, 50.0],
            [131.0, 48.4],
            [131.0, 45.0],
            [126.0, 41.5],
            [122.0, 40.0],
            [121.0, 37.0],
            [122.0, 31.0],
            [120.0, 28.0],
            [115.0, 22.5],
            [108.0, 21.0],
            [102.0, 22.5],
            [99.0, 28.0],
            [96.0, 29.0],
            [89.0, 28.0],
            [84.0, 29.5],
            [79.0, 31.0],
            [75.0, 35.0],
        ]],
    },
    Region {
        name: "Japan",
        rings: &[&[
            [130.0, 31.0],
            [131.0, 33.5],
            [134.0, 34.5],
            [137.0, 35.0],
            [140.0, 36.0],
            [141.5, 38.5],
            [141.0, 41.0],
            [142.0, 45.5],
            [145.5, 44.0],
            [144.0, 42.8],
            [141.7, 42.5],
            [140.0, 40.5],
            [138.0, 36.5],
            [135.0, 33.8],
            [132.0, 32.5],
        ]],
    },
    Region {
        name: "South Korea",
        rings: &[&[
            [126.2, 37.8],
            [127.5, 38.3],
            [128.5, 38.6],
            [129.5, 37.0],
            [129.4, 35.5],
            [127.8, 34.7],
            [126.3, 34.8],
            [126.5, 36.5],
        ]],
    },
    Region {
        name: "Taiwan",
        rings: &[&[
            [120.1, 25.0],
            [121.6, 25.3],
            [122.0, 24.8],
            [121.2, 22.5],
            [120.7, 21.9],
            [120.1, 23.1],
        ]],
    },
    Region {
        name: "Thailand",
        rings: &[&[
            [97.8, 19.8],
            [100.1, 20.4],
            [101.0, 19.5],
            [104.0, 18.0],
            [105.6, 15.5],
            [102.5, 13.5],
            [100.0, 13.5],
            [99.0, 11.0],
            [98.5, 8.5],
            [99.5, 9.5],
            [99.2, 12.0],
            [98.0, 15.0],
            [97.8, 17.5],
        ]],
    },
    Region {
        name: "Indonesia",
        rings: &[
            &[
                [95.3, 5.5],
                [97.5, 5.0],
                [100.0, 2.0],
                [103.0, -1.0],
                [106.0, -3.0],
                [106.0, -6.0],
                [104.0, -5.5],
                [101.0, -3.0],
                [98.0, 1.0],
                [95.5, 3.5],
            ],
            &[
                [105.1, -6.8],
                [108.0, -6.8],
                [111.0, -6.4],
                [114.5, -7.2],
                [114.4, -8.6],
                [110.0, -8.2],
                [106.5, -7.4],
            ],
        ],
    },
    Region {
        name: "Philippines",
        rings: &[
            &[
                [119.9, 16.0],
                [120.3, 18.6],
                [122.0, 18.3],
                [121.6, 16.0],
                [124.0, 13.8],
                [122.0, 13.6],
                [120.6, 14.2],
            ],
            &[
                [121.9, 7.3],
                [124.0, 9.3],
                [126.2, 9.5],
                [126.4, 7.0],
                [124.0, 5.6],
                [122.1, 6.5],
            ],
        ],
    },
    Region {
        name: "Australia",
        rings: &[&[
            [113.5, -26.0],
            [114.0, -22.0],
            [117.0, -20.5],
            [122.0, -17.0],
            [127.0, -14.0],
            [131.0, -12.2],
            [136.5, -12.0],
            [139.0, -17.0],
            [141.5, -12.5],
            [143.0, -10.8],
            [146.0, -18.5],
            [149.0, -21.0],
            [153.0, -27.0],
            [152.0, -32.0],
            [150.0, -37.0],
            [146.0, -39.0],
            [141.0, -38.0],
            [136.0, -35.0],
            [131.0, -31.5],
            [124.0, -33.0],
            [118.0, -35.0],
            [115.0, -34.0],
            [113.5, -30.0],
        ]],
    },
    Region {
        name: "New Zealand",
        rings: &[
            &[
                [172.7, -34.4],
                [176.0, -36.0],
                [178.5, -37.7],
                [176.5, -40.5],
                [174.5, -41.5],
                [173.5, -39.0],
                [174.3, -36.5],
            ],
            &[
                [172.7, -40.7],
                [174.3, -41.7],
                [173.0, -43.5],
                [171.0, -44.5],
                [168.0, -46.7],
                [166.5, -45.8],
                [168.5, -44.0],
                [171.0, -42.5],
            ],
        ],
    },
    Region {
        name: "Russia",
        rings: &[&[
            [28.0, 69.5],
            [40.0, 67.5],
            [55.0, 68.5],
            [66.0, 69.0],
            [73.0, 72.0],
            [80.0, 73.5],
            [90.0, 75.5],
            [100.0, 77.0],
            [110.0, 77.0],
            [120.0, 73.5],
            [130.0, 72.0],
            [140.0, 72.5],
            [150.0, 70.5],
            [160.0, 69.5],
            [170.0, 67.0],
            [179.0, 65.5],
            [172.0, 61.0],
            [160.0, 60.0],
            [158.0, 51.0],
            [155.0, 57.0],
            [143.0, 48.5],
            [135.0, 43.5],
            [131.0, 42.3],
            [127.0, 50.0],
            [121.0, 53.0],
            [111.0, 50.0],
            [98.0, 50.0],
            [85.0, 50.0],
            [77.0, 53.5],
            [70.0, 54.5],
            [61.0, 51.0],
            [51.0, 51.5],
            [47.0, 48.0],
            [40.0, 47.0],
            [38.0, 51.0],
            [31.0, 52.0],
            [28.0, 56.0],
            [31.0, 62.0],
            [30.0, 66.0],
        ]],
    },
];

/// Looks up a country outline by name, ASCII case-insensitive, whitespace
/// trimmed. Multi-country strings and unknown names match nothing and the
/// map leaves them unshaded.
pub fn find_region(name: &str) -> Option<&'static Region> {
    let name = name.trim();
    REGIONS
        .iter()
        .find(|region| region.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_countries() {
        assert!(find_region("United States").is_some());
        assert!(find_region("Canada").is_some());
        assert!(find_region("Japan").is_some());
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert!(find_region("india").is_some());
        assert!(find_region("UNITED KINGDOM").is_some());
        assert!(find_region("  France  ").is_some());
    }

    #[test]
    fn multi_country_strings_match_nothing() {
        assert!(find_region("South Korea, United States").is_none());
        assert!(find_region("Canada, France").is_none());
    }

    #[test]
    fn unknown_names_match_nothing() {
        assert!(find_region("West Berlin").is_none());
        assert!(find_region("").is_none());
    }

    #[test]
    fn every_outline_is_a_closed_shape() {
        for region in REGIONS {
            assert!(!region.rings.is_empty(), "{} has no rings", region.name);
            for ring in region.rings {
                assert!(ring.len() >= 3, "{} has a degenerate ring", region.name);
                for point in *ring {
                    assert!(point[0] >= -180.0 && point[0] <= 180.0);
                    assert!(point[1] >= -90.0 && point[1] <= 90.0);
                }
            }
        }
    }
}
