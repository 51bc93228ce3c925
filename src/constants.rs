/// Datetime layout used by TwelveData observation records
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Default sampling interval requested from the API
pub const DEFAULT_INTERVAL: &str = "30min";
/// Default number of observation records requested per call
pub const DEFAULT_OUTPUT_SIZE: u32 = 13;
/// Default pause in seconds between the bar stage and the indicator stage
///
/// The provider accounts the two endpoint families against separate quota
/// windows, so the stages are kept a full window apart.
pub const DEFAULT_STAGE_PAUSE_SECONDS: u64 = 100;
/// Default maximum requests per rate-limit period (TwelveData free tier)
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 8;
/// Default rate-limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default burst allowance for the rate limiter
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 1;
/// Default REST API timeout in seconds
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Instruments loaded when `ETL_TICKERS` is not set
pub const DEFAULT_TICKERS: &str = "SPY,XOM,USDX,VIXY,GLD,QQQ,ARKK,IBIT";
/// Technical indicators loaded when `ETL_INDICATORS` is not set
pub const DEFAULT_INDICATORS: &str = "adx,rsi,percent_b,ema";
/// User agent string used in HTTP requests to identify this client to the TwelveData API
pub const USER_AGENT: &str = "twelvedata-etl/0.1.0";
