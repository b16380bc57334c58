//! `#[repr(C)]` mirrors of the LibRaw 0.20 records.
//!
//! Field names follow the C headers so the layouts can be diffed against
//! `libraw_types.h` line by line. Array shapes are the header's; where a
//! field is exposed as a matrix the `libraw` crate builds the view.

use std::ffi::{
    c_char, c_double, c_float, c_int, c_long, c_schar, c_short, c_uchar, c_uint, c_ulonglong,
    c_ushort, c_void,
};

#[cfg(not(windows))]
pub type time_t = c_long;
#[cfg(windows)]
pub type time_t = i64;

/// Describes a raw format decoder name and flags.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_decoder_info_t {
    pub decoder_name: *const c_char,
    pub decoder_flags: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_internal_output_params_t {
    pub mix_green: c_uint,
    pub raw_color: c_uint,
    pub zero_is_bad: c_uint,
    pub shrink: c_ushort,
    pub fuji_width: c_ushort,
}

/// Header of an in-memory processed image. `data` is a flexible array of
/// `data_size` bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_processed_image_t {
    /// One of `LIBRAW_IMAGE_JPEG` / `LIBRAW_IMAGE_BITMAP`.
    pub type_: c_uint,
    pub height: c_ushort,
    pub width: c_ushort,
    pub colors: c_ushort,
    pub bits: c_ushort,
    pub data_size: c_uint,
    pub data: [c_uchar; 1],
}

/// The primary parameters of the image.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_iparams_t {
    pub guard: [c_char; 4],
    pub make: [c_char; 64],
    pub model: [c_char; 64],
    pub software: [c_char; 64],
    pub normalized_make: [c_char; 64],
    pub normalized_model: [c_char; 64],
    pub maker_index: c_uint,
    pub raw_count: c_uint,
    pub dng_version: c_uint,
    pub is_foveon: c_uint,
    pub colors: c_int,
    pub filters: c_uint,
    pub xtrans: [[c_char; 6]; 6],
    pub xtrans_abs: [[c_char; 6]; 6],
    pub cdesc: [c_char; 5],
    pub xmplen: c_uint,
    pub xmpdata: *mut c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_raw_inset_crop_t {
    pub cleft: c_ushort,
    pub ctop: c_ushort,
    pub cwidth: c_ushort,
    pub cheight: c_ushort,
    pub aspect: c_ushort,
}

/// Geometry of the raw frame and of the processed image.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_image_sizes_t {
    pub raw_height: c_ushort,
    pub raw_width: c_ushort,
    pub height: c_ushort,
    pub width: c_ushort,
    pub top_margin: c_ushort,
    pub left_margin: c_ushort,
    pub iheight: c_ushort,
    pub iwidth: c_ushort,
    /// Bytes per row of `rawdata.raw_image`.
    pub raw_pitch: c_uint,
    pub pixel_aspect: c_double,
    pub flip: c_int,
    pub mask: [[c_int; 4]; 8],
    pub raw_inset_crop: libraw_raw_inset_crop_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ph1_t {
    pub format: c_int,
    pub key_off: c_int,
    pub tag_21a: c_int,
    pub t_black: c_int,
    pub split_col: c_int,
    pub black_col: c_int,
    pub split_row: c_int,
    pub black_row: c_int,
    pub tag_210: c_float,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_dng_color_t {
    pub parsedfields: c_uint,
    pub illuminant: c_ushort,
    pub calibration: [[c_float; 4]; 4],
    pub colormatrix: [[c_float; 3]; 4],
    pub forwardmatrix: [[c_float; 4]; 3],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_dng_levels_t {
    pub parsedfields: c_uint,
    pub dng_cblack: [c_uint; 4102],
    pub dng_black: c_uint,
    pub dng_whitelevel: [c_uint; 4],
    /// Origin and size.
    pub default_crop: [c_uint; 4],
    pub preview_colorspace: c_uint,
    pub analogbalance: [c_float; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_P1_color_t {
    pub romm_cam: [c_float; 9],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_canon_makernotes_t {
    pub ColorDataVer: c_int,
    pub ColorDataSubVer: c_int,
    pub SpecularWhiteLevel: c_int,
    pub NormalWhiteLevel: c_int,
    pub ChannelBlackLevel: [c_int; 4],
    pub AverageBlackLevel: c_int,
    pub multishot: [c_uint; 4],
    pub MeteringMode: c_short,
    pub SpotMeteringMode: c_short,
    pub FlashMeteringMode: c_char,
    pub FlashExposureLock: c_short,
    pub ExposureMode: c_short,
    pub AESetting: c_short,
    pub HighlightTonePriority: c_char,
    pub ImageStabilization: c_short,
    pub FocusMode: c_short,
    pub AFPoint: c_short,
    pub FocusContinuous: c_short,
    pub AFPointsInFocus30D: c_short,
    pub AFPointsInFocus1D: [c_char; 8],
    pub AFPointsInFocus5D: c_ushort,
    pub AFAreaMode: c_ushort,
    pub NumAFPoints: c_ushort,
    pub ValidAFPoints: c_ushort,
    pub AFImageWidth: c_ushort,
    pub AFImageHeight: c_ushort,
    pub AFAreaWidths: [c_short; 61],
    pub AFAreaHeights: [c_short; 61],
    pub AFAreaXPositions: [c_short; 61],
    pub AFAreaYPositions: [c_short; 61],
    pub AFPointsInFocus: [c_short; 4],
    pub AFPointsSelected: [c_short; 4],
    pub PrimaryAFPoint: c_ushort,
    pub FlashMode: c_short,
    pub FlashActivity: c_short,
    pub FlashBits: c_short,
    pub ManualFlashOutput: c_short,
    pub FlashOutput: c_short,
    pub FlashGuideNumber: c_short,
    pub ContinuousDrive: c_short,
    pub SensorWidth: c_short,
    pub SensorHeight: c_short,
    pub SensorLeftBorder: c_short,
    pub SensorTopBorder: c_short,
    pub SensorRightBorder: c_short,
    pub SensorBottomBorder: c_short,
    pub BlackMaskLeftBorder: c_short,
    pub BlackMaskTopBorder: c_short,
    pub BlackMaskRightBorder: c_short,
    pub BlackMaskBottomBorder: c_short,
    pub AFMicroAdjMode: c_int,
    pub AFMicroAdjValue: c_float,
    pub MakernotesFlip: c_short,
    pub RecordMode: c_short,
    pub SRAWQuality: c_short,
    pub wbi: c_uint,
    pub firmware: c_float,
    pub RF_lensID: c_short,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_hasselblad_makernotes_t {
    pub BaseISO: c_int,
    pub Gain: c_double,
    pub Sensor: [c_char; 8],
    pub SensorUnit: [c_char; 64],
    pub HostBody: [c_char; 64],
    pub SensorCode: c_int,
    pub SensorSubCode: c_int,
    pub CoatingCode: c_int,
    pub uncropped: c_int,
    pub CaptureSequenceInitiator: [c_char; 32],
    pub SensorUnitConnector: [c_char; 64],
    pub format: c_int,
    pub nIFD_CM: c_int,
    pub RecommendedCrop: c_int,
    pub mnColorMatrix: c_double,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_fuji_info_t {
    pub ExpoMidPointShift: c_float,
    pub DynamicRange: c_ushort,
    pub FilmMode: c_ushort,
    pub DynamicRangeSetting: c_ushort,
    pub DevelopmentDynamicRange: c_ushort,
    pub AutoDynamicRange: c_ushort,
    pub DRangePriority: c_ushort,
    pub DRangePriorityAuto: c_ushort,
    pub DRangePriorityFixed: c_ushort,
    pub BrightnessCompensation: c_float,
    pub FocusMode: c_ushort,
    pub AFMode: c_ushort,
    pub FocusPixel: [c_ushort; 2],
    pub ImageStabilization: [c_ushort; 3],
    pub FlashMode: c_ushort,
    pub WB_Preset: c_ushort,
    pub ShutterType: c_ushort,
    pub ExrMode: c_ushort,
    pub Macro: c_ushort,
    pub Rating: c_uint,
    pub CropMode: c_ushort,
    pub FrameRate: c_ushort,
    pub FrameWidth: c_ushort,
    pub FrameHeight: c_ushort,
    pub SerialSignature: [c_char; 0x0c + 1],
    pub RAFVersion: [c_char; 4 + 1],
    pub RAFDataVersion: c_ushort,
    pub isTSNERDTS: c_uint,
    pub DriveMode: c_ushort,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_sensor_highspeed_crop_t {
    pub cleft: c_ushort,
    pub ctop: c_ushort,
    pub cwidth: c_ushort,
    pub cheight: c_ushort,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_nikon_makernotes_t {
    pub ExposureBracketValue: c_double,
    pub ActiveDLighting: c_ushort,
    pub ShootingMode: c_ushort,
    pub ImageStabilization: [c_uchar; 7],
    pub VibrationReduction: c_uchar,
    pub VRMode: c_uchar,
    pub FocusMode: [c_char; 7],
    pub AFPoint: c_uchar,
    pub AFPointsInFocus: c_ushort,
    pub ContrastDetectAF: c_uchar,
    pub AFAreaMode: c_uchar,
    pub PhaseDetectAF: c_uchar,
    pub PrimaryAFPoint: c_uchar,
    pub AFPointsUsed: [c_uchar; 29],
    pub AFImageWidth: c_ushort,
    pub AFImageHeight: c_ushort,
    pub AFAreaXPposition: c_ushort,
    pub AFAreaYPosition: c_ushort,
    pub AFAreaWidth: c_ushort,
    pub AFAreaHeight: c_ushort,
    pub ContrastDetectAFInFocus: c_uchar,
    pub FlashSetting: [c_char; 13],
    pub FlashType: [c_char; 20],
    pub FlashExposureCompensation: [c_uchar; 4],
    pub ExternalFlashExposureComp: [c_uchar; 4],
    pub FlashExposureBracketValue: [c_uchar; 4],
    pub FlashMode: c_uchar,
    pub FlashExposureCompensation2: c_char,
    pub FlashExposureCompensation3: c_char,
    pub FlashExposureCompensation4: c_char,
    pub FlashSource: c_uchar,
    pub FlashFirmware: [c_uchar; 2],
    pub ExternalFlashFlags: c_uchar,
    pub FlashControlCommanderMode: c_uchar,
    pub FlashOutputAndCompensation: c_uchar,
    pub FlashFocalLength: c_uchar,
    pub FlashGNDistance: c_uchar,
    pub FlashGroupControlMode: [c_uchar; 4],
    pub FlashGroupOutputAndCompensation: [c_uchar; 4],
    pub FlashColorFilter: c_uchar,
    pub NEFCompression: c_ushort,
    pub ExposureMode: c_int,
    pub ExposureProgram: c_int,
    pub nMEshots: c_int,
    pub MEgainOn: c_int,
    pub ME_WB: [c_double; 4],
    pub AFFineTune: c_uchar,
    pub AFFineTuneIndex: c_uchar,
    pub AFFineTuneAdj: c_schar,
    pub LensDataVersion: c_uint,
    pub FlashInfoVersion: c_uint,
    pub ColorBalanceVersion: c_uint,
    pub key: c_uchar,
    pub NEFBitDepth: [c_ushort; 4],
    pub HighSpeedCropFormat: c_ushort,
    pub SensorHighSpeedCrop: libraw_sensor_highspeed_crop_t,
    pub SensorWidth: c_ushort,
    pub SensorHeight: c_ushort,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_olympus_makernotes_t {
    pub SensorCalibration: [c_int; 2],
    pub FocusMode: [c_ushort; 2],
    pub AutoFocus: c_ushort,
    pub AFPoint: c_ushort,
    pub AFAreas: [c_uint; 64],
    pub AFPointSelected: [c_double; 5],
    pub AFResult: c_ushort,
    pub DriveMode: [c_ushort; 5],
    pub ColorSpace: c_ushort,
    pub AffineTune: c_uchar,
    pub AffineTuneAdj: [c_short; 3],
    pub CameraType2: [c_char; 6],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_panasonic_makernotes_t {
    /// 34826 (RAW 2), 34828 (RAW 3), 34830, or 34316 (RAW 1, most bodies).
    pub Compression: c_ushort,
    pub BlackLevelDim: c_ushort,
    pub BlackLevel: [c_float; 8],
    pub Multishot: c_uint,
    pub gamma: c_float,
    pub HighISOMultiplier: [c_int; 3],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_pentax_makernotes_t {
    pub FocusMode: c_ushort,
    pub AFPointSelected: c_ushort,
    pub AFPointsInFocus: c_uint,
    pub FocusPosition: c_ushort,
    pub DriveMode: [c_uchar; 4],
    pub AFAdjustment: c_short,
    pub MultiExposure: c_uchar,
    pub Quality: c_ushort,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_kodak_makernotes_t {
    pub BlackLevelTop: c_ushort,
    pub BlackLevelBottom: c_ushort,
    /// KDC files, negative values or zeros.
    pub offset_left: c_short,
    pub offset_top: c_short,
    /// Valid for P712, P850, P880.
    pub clipBlack: c_ushort,
    pub clipWhite: c_ushort,
    pub romm_camDaylight: [[c_float; 3]; 3],
    pub romm_camTungsten: [[c_float; 3]; 3],
    pub romm_camFluorescent: [[c_float; 3]; 3],
    pub romm_camFlash: [[c_float; 3]; 3],
    pub romm_camCustom: [[c_float; 3]; 3],
    pub romm_camAuto: [[c_float; 3]; 3],
    pub val018percent: c_ushort,
    pub val100percent: c_ushort,
    pub val170percent: c_ushort,
    pub MakerNoteKodak8a: c_short,
    pub ISOCalibrationGain: c_float,
    pub AnalogISO: c_float,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_p1_makernotes_t {
    pub Software: [c_char; 64],
    pub SystemType: [c_char; 64],
    pub FirmwareString: [c_char; 256],
    pub SystemModel: [c_char; 64],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_sony_info_t {
    pub CameraType: c_ushort,
    /// 0 if not found/deciphered, 0xa, 0xb, 0xc following exiftool convention.
    pub Sony0x9400_version: c_uchar,
    pub Sony0x9400_ReleaseMode2: c_uchar,
    pub Sony0x9400_SequenceImageNumber: c_uint,
    pub Sony0x9400_SequenceLength1: c_uchar,
    pub Sony0x9400_SequenceFileNumber: c_uint,
    pub Sony0x9400_SequenceLength2: c_uchar,
    pub AFAreaModeSetting: c_uchar,
    pub FlexibleSpotPosition: c_ushort,
    pub AFPointSelected: c_uchar,
    pub AFPointsUsed: c_uchar,
    pub AFTracking: c_uchar,
    pub AFType: c_uchar,
    pub FocusLocation: c_ushort,
    pub AFMicroAdjValue: c_schar,
    pub AFMicroAdjOn: c_schar,
    pub AFMicroAdjRegisteredLenses: c_uchar,
    pub VariableLowPassFilter: c_ushort,
    pub LongExposureNoiseReduction: c_uint,
    pub HighISONoiseReduction: c_ushort,
    pub HDR: [c_ushort; 2],
    pub group2010: c_ushort,
    pub real_iso_offset: c_ushort,
    pub MeteringMode_offset: c_ushort,
    pub ExposureProgram_offset: c_ushort,
    pub ReleaseMode2_offset: c_ushort,
    pub MinoltaCamID: c_uint,
    pub firmware: c_float,
    pub ImageCount3_offset: c_ushort,
    pub ImageCount3: c_uint,
    pub ElectronicFrontCurtainShutter: c_uint,
    pub MeteringMode2: c_ushort,
    pub SonyDateTime: [c_char; 20],
    pub ShotNumberSincePowerUp: c_uint,
    pub PixelShiftGroupPrefix: c_ushort,
    pub PixelShiftGroupID: c_uint,
    pub nShotsInPixelShiftGroup: c_char,
    pub numInPixelShiftGroup: c_char,
    pub prd_ImageHeight: c_ushort,
    pub prd_ImageWidth: c_ushort,
    pub prd_RawBitDepth: c_ushort,
    pub prd_StorageMethod: c_ushort,
    pub prd_BayerPattern: c_ushort,
    pub SonyRawFileType: c_ushort,
    pub RAWFileType: c_ushort,
    pub Quality: c_uint,
    pub FileFormat: c_ushort,
}

/// Color calibration and white balance data.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_colordata_t {
    /// Tone curve, 0x10000 entries.
    pub curve: [c_ushort; 0x10000],
    pub cblack: [c_uint; 4102],
    pub black: c_uint,
    pub data_maximum: c_uint,
    pub maximum: c_uint,
    pub linear_max: [c_long; 4],
    pub fmaximum: c_float,
    pub fnorm: c_float,
    pub white: [[c_ushort; 8]; 8],
    pub cam_mul: [c_float; 4],
    pub pre_mul: [c_float; 4],
    pub cmatrix: [[c_float; 4]; 3],
    pub ccm: [[c_float; 4]; 3],
    pub rgb_cam: [[c_float; 4]; 3],
    pub cam_xyz: [[c_float; 3]; 4],
    pub phase_one_data: ph1_t,
    pub flash_used: c_float,
    pub canon_ev: c_float,
    pub model2: [c_char; 64],
    pub UniqueCameraModel: [c_char; 64],
    pub LocalizedCameraModel: [c_char; 64],
    pub ImageUniqueID: [c_char; 64],
    pub RawDataUniqueID: [c_char; 17],
    pub OriginalRawFileName: [c_char; 64],
    pub profile: *mut c_void,
    pub profile_length: c_uint,
    pub black_stat: [c_uint; 8],
    pub dng_color: [libraw_dng_color_t; 2],
    pub dng_levels: libraw_dng_levels_t,
    pub WB_Coeffs: [[c_int; 4]; 256],
    pub WBCT_Coeffs: [[c_float; 5]; 64],
    pub as_shot_wb_applied: c_int,
    pub P1_color: [libraw_P1_color_t; 2],
    pub raw_bps: c_uint,
    pub ExifColorSpace: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_thumbnail_t {
    /// One of the `LIBRAW_THUMBNAIL_*` formats.
    pub tformat: c_uint,
    pub twidth: c_ushort,
    pub theight: c_ushort,
    pub tlength: c_uint,
    pub tcolors: c_int,
    pub thumb: *mut c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_gps_info_t {
    pub latitude: [c_float; 3],
    pub longtitude: [c_float; 3],
    pub gpstimestamp: [c_float; 3],
    pub altitude: c_float,
    pub altref: c_char,
    pub latref: c_char,
    pub longref: c_char,
    pub gpsstatus: c_char,
    pub gpsparsed: c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_imgother_t {
    pub iso_speed: c_float,
    pub shutter: c_float,
    pub aperture: c_float,
    pub focal_len: c_float,
    pub timestamp: time_t,
    pub shot_order: c_uint,
    pub gpsdata: [c_uint; 32],
    pub parsed_gps: libraw_gps_info_t,
    pub desc: [c_char; 512],
    pub artist: [c_char; 64],
    pub analogbalance: [c_float; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_metadata_common_t {
    pub FlashEC: c_float,
    pub FlashGN: c_float,
    pub CameraTemperature: c_float,
    pub SensorTemperature: c_float,
    pub SensorTemperature2: c_float,
    pub LensTemperature: c_float,
    pub AmbientTemperature: c_float,
    pub BatteryTemperature: c_float,
    pub exifAmbientTemperature: c_float,
    pub exifHumidity: c_float,
    pub exifPressure: c_float,
    pub exifWaterDepth: c_float,
    pub exifAcceleration: c_float,
    pub exifCameraElevationAngle: c_float,
    pub real_ISO: c_float,
    pub exifExposureIndex: c_float,
    pub ColorSpace: c_ushort,
    pub firmware: c_char,
}

/// Processing knobs. The trailing comments name the matching dcraw switch.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_output_params_t {
    /// -A x1 y1 x2 y2
    pub greybox: [c_uint; 4],
    /// -B x1 y1 x2 y2
    pub cropbox: [c_uint; 4],
    /// -C
    pub aber: [c_double; 4],
    /// -g
    pub gamm: [c_double; 6],
    /// -r mul0 mul1 mul2 mul3
    pub user_mul: [c_float; 4],
    /// -s
    pub shot_select: c_uint,
    /// -b
    pub bright: c_float,
    /// -n
    pub threshold: c_float,
    /// -h
    pub half_size: c_int,
    /// -f
    pub four_color_rgb: c_int,
    /// -H
    pub highlight: c_int,
    /// -a
    pub use_auto_wb: c_int,
    /// -w
    pub use_camera_wb: c_int,
    /// +M/-M
    pub use_camera_matrix: c_int,
    /// -o
    pub output_color: c_int,
    /// -o
    pub output_profile: *mut c_char,
    /// -p
    pub camera_profile: *mut c_char,
    /// -P
    pub bad_pixels: *mut c_char,
    /// -K
    pub dark_frame: *mut c_char,
    /// -4
    pub output_bps: c_int,
    /// -T
    pub output_tiff: c_int,
    /// -t
    pub user_flip: c_int,
    /// -q
    pub user_qual: c_int,
    /// -k
    pub user_black: c_int,
    pub user_cblack: [c_int; 4],
    /// -S
    pub user_sat: c_int,
    /// -m
    pub med_passes: c_int,
    pub auto_bright_thr: c_float,
    pub adjust_maximum_thr: c_float,
    /// -W
    pub no_auto_bright: c_int,
    /// -j
    pub use_fuji_rotate: c_int,
    pub green_matching: c_int,
    pub dcb_iterations: c_int,
    pub dcb_enhance_fl: c_int,
    pub fbdd_noiserd: c_int,
    pub exp_correc: c_int,
    pub exp_shift: c_float,
    pub exp_preser: c_float,
    pub use_rawspeed: c_int,
    pub use_dngsdk: c_int,
    pub no_auto_scale: c_int,
    pub no_interpolation: c_int,
    pub raw_processing_options: c_uint,
    pub max_raw_memory_mb: c_uint,
    pub sony_arw2_posterization_thr: c_int,
    /// Nikon Coolscan
    pub coolscan_nef_gamma: c_float,
    pub p4shot_order: [c_char; 5],
    pub custom_camera_strings: *mut *mut c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_makernotes_lens_t {
    pub LensID: c_ulonglong,
    pub Lens: [c_char; 128],
    pub LensFormat: c_ushort,
    pub LensMount: c_ushort,
    pub CamID: c_ulonglong,
    pub CameraFormat: c_ushort,
    pub CameraMount: c_ushort,
    pub body: [c_char; 64],
    pub FocalType: c_short,
    pub LensFeatures_pre: [c_char; 16],
    pub LensFeatures_suf: [c_char; 16],
    pub MinFocal: c_float,
    pub MaxFocal: c_float,
    pub MaxAp4MinFocal: c_float,
    pub MaxAp4MaxFocal: c_float,
    pub MinAp4MinFocal: c_float,
    pub MinAp4MaxFocal: c_float,
    pub MaxAp: c_float,
    pub MinAp: c_float,
    pub CurFocal: c_float,
    pub CurAp: c_float,
    pub MaxAp4CurFocal: c_float,
    pub MinAp4CurFocal: c_float,
    pub LensFStops: c_float,
    pub TeleconverterID: c_ulonglong,
    pub Teleconverter: [c_char; 128],
    pub AdapterID: c_ulonglong,
    pub Adapter: [c_char; 128],
    pub AttachmentID: c_ulonglong,
    pub Attachment: [c_char; 128],
    pub CanonFocalUnits: c_short,
    pub FocalLengthIn35mmFormat: c_float,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_nikonlens_t {
    pub NikonEffectiveMaxAp: c_float,
    pub NikonLensIDNumber: c_uchar,
    pub NikonLensFStops: c_uchar,
    pub NikonMCUVersion: c_uchar,
    pub NikonLensType: c_uchar,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_dnglens_t {
    pub MinFocal: c_float,
    pub MaxFocal: c_float,
    pub MaxAp4MinFocal: c_float,
    pub MaxAp4MaxFocal: c_float,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_lensinfo_t {
    pub MinFocal: c_float,
    pub MaxFocal: c_float,
    pub MaxAp4MinFocal: c_float,
    pub MaxAp4MaxFocal: c_float,
    pub EXIF_MaxAp: c_float,
    pub LensMake: [c_char; 128],
    pub Lens: [c_char; 128],
    pub LensSerial: [c_char; 128],
    pub InternalLensSerial: [c_char; 128],
    pub FocalLengthIn35mmFormat: c_ushort,
    pub nikon: libraw_nikonlens_t,
    pub dng: libraw_dnglens_t,
    pub makernotes: libraw_makernotes_lens_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_makernotes_t {
    pub canon: libraw_canon_makernotes_t,
    pub nikon: libraw_nikon_makernotes_t,
    pub hasselblad: libraw_hasselblad_makernotes_t,
    pub fuji: libraw_fuji_info_t,
    pub olympus: libraw_olympus_makernotes_t,
    pub sony: libraw_sony_info_t,
    pub kodak: libraw_kodak_makernotes_t,
    pub panasonic: libraw_panasonic_makernotes_t,
    pub pentax: libraw_pentax_makernotes_t,
    pub phaseone: libraw_p1_makernotes_t,
    pub common: libraw_metadata_common_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_shootinginfo_t {
    pub DriveMode: c_short,
    pub FocusMode: c_short,
    pub MeteringMode: c_short,
    pub AFPoint: c_short,
    pub ExposureMode: c_short,
    pub ExposureProgram: c_short,
    pub ImageStabilization: c_short,
    pub BodySerial: [c_char; 64],
    pub InternalBodySerial: [c_char; 64],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_custom_camera_t {
    pub fsize: c_uint,
    pub rw: c_ushort,
    pub rh: c_ushort,
    pub lm: c_uchar,
    pub tm: c_uchar,
    pub rm: c_uchar,
    pub bm: c_uchar,
    pub lf: c_uchar,
    pub cf: c_uchar,
    pub max: c_uchar,
    pub flags: c_uchar,
    pub t_make: [c_char; 10],
    pub t_model: [c_char; 20],
    pub offset: c_ushort,
}

/// Unpacked sensor data.
///
/// `raw_image` holds bayer data, one value per pixel, with rows
/// `sizes.raw_pitch` bytes apart. `libraw_raw2image` converts it into the
/// four-component `libraw_data_t::image` layout that demosaic expects.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_rawdata_t {
    pub raw_alloc: *mut c_void,
    pub raw_image: *mut c_ushort,
    pub color4_image: *mut [c_ushort; 4],
    pub color3_image: *mut [c_ushort; 3],
    pub float_image: *mut c_float,
    pub float3_image: *mut [c_float; 3],
    pub float4_image: *mut [c_float; 4],
    pub ph1_black: *mut [c_short; 2],
    pub ph1_rblack: *mut [c_short; 2],
    pub iparams: libraw_iparams_t,
    pub sizes: libraw_image_sizes_t,
    pub ioparams: libraw_internal_output_params_t,
    pub color: libraw_colordata_t,
}

/// Top-level processor state, the `imgdata` member of the C++ `LibRaw`
/// class. The pointer returned by `libraw_init` addresses one of these.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct libraw_data_t {
    pub image: *mut [c_ushort; 4],
    pub sizes: libraw_image_sizes_t,
    pub idata: libraw_iparams_t,
    pub lens: libraw_lensinfo_t,
    pub makernotes: libraw_makernotes_t,
    pub shootinginfo: libraw_shootinginfo_t,
    pub params: libraw_output_params_t,
    pub progress_flags: c_uint,
    pub process_warnings: c_uint,
    pub color: libraw_colordata_t,
    pub other: libraw_imgother_t,
    pub thumbnail: libraw_thumbnail_t,
    pub rawdata: libraw_rawdata_t,
    pub parent_class: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct fuji_compressed_params {
    /// Quantization table.
    pub q_table: *mut c_schar,
    /// Quantization points.
    pub q_points: [c_int; 5],
    pub max_bits: c_int,
    pub min_value: c_int,
    pub raw_bits: c_int,
    pub total_values: c_int,
    pub maxDiff: c_int,
    pub line_width: c_ushort,
}


#[cfg(all(test, feature = "layout-check"))]
mod layout_check {
    use std::mem::{offset_of, size_of};

    #[allow(dead_code, non_upper_case_globals, non_camel_case_types, non_snake_case)]
    #[allow(clippy::all)]
    mod header {
        include!(concat!(env!("OUT_DIR"), "/header_layout.rs"));
    }

    macro_rules! same_size {
        ($($ty:ident),* $(,)?) => {
            $(
                assert_eq!(
                    size_of::<super::$ty>(),
                    size_of::<header::$ty>(),
                    concat!("size mismatch for ", stringify!($ty))
                );
            )*
        };
    }

    #[test]
    fn record_sizes_match_header() {
        same_size!(
            libraw_decoder_info_t,
            libraw_internal_output_params_t,
            libraw_iparams_t,
            libraw_image_sizes_t,
            libraw_dng_color_t,
            libraw_dng_levels_t,
            libraw_canon_makernotes_t,
            libraw_hasselblad_makernotes_t,
            libraw_fuji_info_t,
            libraw_nikon_makernotes_t,
            libraw_olympus_makernotes_t,
            libraw_panasonic_makernotes_t,
            libraw_pentax_makernotes_t,
            libraw_kodak_makernotes_t,
            libraw_p1_makernotes_t,
            libraw_sony_info_t,
            libraw_colordata_t,
            libraw_thumbnail_t,
            libraw_imgother_t,
            libraw_metadata_common_t,
            libraw_output_params_t,
            libraw_lensinfo_t,
            libraw_makernotes_t,
            libraw_shootinginfo_t,
            libraw_rawdata_t,
            libraw_data_t,
        );
    }

    #[test]
    fn top_level_offsets_match_header() {
        assert_eq!(
            offset_of!(super::libraw_data_t, params),
            offset_of!(header::libraw_data_t, params)
        );
        assert_eq!(
            offset_of!(super::libraw_data_t, color),
            offset_of!(header::libraw_data_t, color)
        );
        assert_eq!(
            offset_of!(super::libraw_data_t, rawdata),
            offset_of!(header::libraw_data_t, rawdata)
        );
        assert_eq!(
            offset_of!(super::libraw_colordata_t, dng_color),
            offset_of!(header::libraw_colordata_t, dng_color)
        );
    }
}
