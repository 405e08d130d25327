//! String-enum parameter types shared across endpoints.
//!
//! These enumerate the fixed vocabularies CoinMarketCap accepts for sort
//! orders, listing filters and time windows. They are request-side only and
//! encode through [`as_str`](ListingSort::as_str) when building query
//! parameters.

/// Sort field for cryptocurrency listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingSort {
    MarketCap,
    MarketCapStrict,
    Name,
    Symbol,
    DateAdded,
    Price,
    CirculatingSupply,
    TotalSupply,
    MaxSupply,
    NumMarketPairs,
    Volume24h,
    PercentChange1h,
    PercentChange24h,
    PercentChange7d,
    MarketCapByTotalSupplyStrict,
    Volume7d,
    Volume30d,
}

impl ListingSort {
    /// Wire representation of the sort field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingSort::MarketCap => "market_cap",
            ListingSort::MarketCapStrict => "market_cap_strict",
            ListingSort::Name => "name",
            ListingSort::Symbol => "symbol",
            ListingSort::DateAdded => "date_added",
            ListingSort::Price => "price",
            ListingSort::CirculatingSupply => "circulating_supply",
            ListingSort::TotalSupply => "total_supply",
            ListingSort::MaxSupply => "max_supply",
            ListingSort::NumMarketPairs => "num_market_pairs",
            ListingSort::Volume24h => "volume_24h",
            ListingSort::PercentChange1h => "percent_change_1h",
            ListingSort::PercentChange24h => "percent_change_24h",
            ListingSort::PercentChange7d => "percent_change_7d",
            ListingSort::MarketCapByTotalSupplyStrict => "market_cap_by_total_supply_strict",
            ListingSort::Volume7d => "volume_7d",
            ListingSort::Volume30d => "volume_30d",
        }
    }
}

impl std::fmt::Display for ListingSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter for coins versus tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptocurrencyType {
    All,
    Coins,
    Tokens,
}

impl CryptocurrencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CryptocurrencyType::All => "all",
            CryptocurrencyType::Coins => "coins",
            CryptocurrencyType::Tokens => "tokens",
        }
    }
}

/// Listing status filter for map endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    Active,
    Inactive,
    Untracked,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Inactive => "inactive",
            ListingStatus::Untracked => "untracked",
        }
    }
}

/// Sampling interval for historical endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Min5,
    Min10,
    Min15,
    Min30,
    Min45,
    Hour1,
    Hour2,
    Hour3,
    Hour4,
    Hour6,
    Hour12,
    Hour24,
    Day1,
    Day2,
    Day3,
    Day7,
    Day14,
    Day15,
    Day30,
    Day60,
    Day90,
    Day365,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Min5 => "5m",
            Interval::Min10 => "10m",
            Interval::Min15 => "15m",
            Interval::Min30 => "30m",
            Interval::Min45 => "45m",
            Interval::Hour1 => "1h",
            Interval::Hour2 => "2h",
            Interval::Hour3 => "3h",
            Interval::Hour4 => "4h",
            Interval::Hour6 => "6h",
            Interval::Hour12 => "12h",
            Interval::Hour24 => "24h",
            Interval::Day1 => "1d",
            Interval::Day2 => "2d",
            Interval::Day3 => "3d",
            Interval::Day7 => "7d",
            Interval::Day14 => "14d",
            Interval::Day15 => "15d",
            Interval::Day30 => "30d",
            Interval::Day60 => "60d",
            Interval::Day90 => "90d",
            Interval::Day365 => "365d",
            Interval::Hourly => "hourly",
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
            Interval::Yearly => "yearly",
        }
    }
}

/// Time window for trending and performance endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePeriod {
    AllTime,
    Yesterday,
    Hours24,
    Days7,
    Days30,
    Days90,
    Days365,
    Hours1,
}

impl TimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::AllTime => "all_time",
            TimePeriod::Yesterday => "yesterday",
            TimePeriod::Hours24 => "24h",
            TimePeriod::Days7 => "7d",
            TimePeriod::Days30 => "30d",
            TimePeriod::Days90 => "90d",
            TimePeriod::Days365 => "365d",
            TimePeriod::Hours1 => "1h",
        }
    }
}

/// Fee-charging market type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketType {
    Fees,
    NoFees,
    All,
}

impl MarketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::Fees => "fees",
            MarketType::NoFees => "no_fees",
            MarketType::All => "all",
        }
    }
}

/// Exchange category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeCategory {
    All,
    Spot,
    Derivatives,
    Dex,
    Lending,
}

impl ExchangeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeCategory::All => "all",
            ExchangeCategory::Spot => "spot",
            ExchangeCategory::Derivatives => "derivatives",
            ExchangeCategory::Dex => "dex",
            ExchangeCategory::Lending => "lending",
        }
    }
}

/// Fee type applied to a market pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeType {
    All,
    Percentage,
    NoFees,
    TransactionalMining,
    Unknown,
}

impl FeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeType::All => "all",
            FeeType::Percentage => "percentage",
            FeeType::NoFees => "no-fees",
            FeeType::TransactionalMining => "transactional-mining",
            FeeType::Unknown => "unknown",
        }
    }
}

/// Market pair category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairCategory {
    All,
    Spot,
    Derivatives,
    Otc,
    Perpetual,
}

impl PairCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairCategory::All => "all",
            PairCategory::Spot => "spot",
            PairCategory::Derivatives => "derivatives",
            PairCategory::Otc => "otc",
            PairCategory::Perpetual => "perpetual",
        }
    }
}

/// Lifecycle state of an airdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirdropStatus {
    Ended,
    Ongoing,
    Upcoming,
}

impl AirdropStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AirdropStatus::Ended => "ENDED",
            AirdropStatus::Ongoing => "ONGOING",
            AirdropStatus::Upcoming => "UPCOMING",
        }
    }
}

/// Sort field for exchange listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeSort {
    Name,
    Volume24h,
    Volume24hAdjusted,
    ExchangeScore,
    Id,
}

impl ExchangeSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeSort::Name => "name",
            ExchangeSort::Volume24h => "volume_24h",
            ExchangeSort::Volume24hAdjusted => "volume_24h_adjusted",
            ExchangeSort::ExchangeScore => "exchange_score",
            ExchangeSort::Id => "id",
        }
    }
}
