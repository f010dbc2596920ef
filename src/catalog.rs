//! Static register and coil map of the MX2 drive (datasheet section B-4).
//!
//! Tables are declared through small macros that emit one handle per entry
//! plus the backing definition table. All tables are declared in ascending
//! address order; [`crate::entity::Register::next`] and the payload decoders
//! rely on that ordering.

use crate::entity::CoilDef;

macro_rules! coil_table {
    ( $( $handle:ident : $name:literal = $addr:expr ),+ $(,)? ) => {
        pub(crate) static COIL_DEFS: &[CoilDef] = &[
            $( CoilDef { name: $name, address: $addr } ),+
        ];

        /// Coil handles (datasheet section B-4, p. 316).
        pub mod coils {
            use crate::entity::Coil;
            coil_table!(@handles 0usize, $($handle)+);
        }
    };
    (@handles $idx:expr, $handle:ident $($rest:ident)*) => {
        pub static $handle: Coil = Coil::at($idx);
        coil_table!(@handles $idx + 1usize, $($rest)*);
    };
    (@handles $idx:expr,) => {};
}

macro_rules! register_namespace {
    (
        $(#[$meta:meta])*
        pub mod $m:ident : $title:literal {
            $( $handle:ident : $name:literal = ($addr:expr, $w:expr) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub mod $m {
            use crate::entity::{Namespace, Register, RegisterDef};

            static DEFS: &[RegisterDef] = &[
                $( RegisterDef { name: $name, address: $addr, words: $w } ),+
            ];

            pub static NAMESPACE: Namespace = Namespace { name: $title, defs: DEFS };

            register_namespace!(@handles 0usize, $($handle)+);
        }
    };
    (@handles $idx:expr, $handle:ident $($rest:ident)*) => {
        pub static $handle: Register = Register::at(&NAMESPACE, $idx);
        register_namespace!(@handles $idx + 1usize, $($rest)*);
    };
    (@handles $idx:expr,) => {};
}

coil_table! {
    OPERATION_COMMAND: "OperationCommand" = 0x01,
    ROTATION_DIRECTION_COMMAND: "RotationDirectionCommand" = 0x02,
    EXTERNAL_TRIP: "ExternalTrip" = 0x03,
    TRIP_RESET: "TripReset" = 0x04,
    INTELLIGENT_INPUT_1: "IntelligentInput1" = 0x07,
    INTELLIGENT_INPUT_2: "IntelligentInput2" = 0x08,
    INTELLIGENT_INPUT_3: "IntelligentInput3" = 0x09,
    INTELLIGENT_INPUT_4: "IntelligentInput4" = 0x0A,
    INTELLIGENT_INPUT_5: "IntelligentInput5" = 0x0B,
    INTELLIGENT_INPUT_6: "IntelligentInput6" = 0x0C,
    INTELLIGENT_INPUT_7: "IntelligentInput7" = 0x0D,
    OPERATION_STATUS: "OperationStatus" = 0x0F,
    ROTATION_DIRECTION_STATUS: "RotationDirectionStatus" = 0x10,
    INVERTER_READY: "InverterReady" = 0x11,
    RUNNING: "Running" = 0x13,
    CONSTANT_SPEED_REACHED: "ConstantSpeedReached" = 0x14,
    SET_FREQUENCY_OVERREACHED: "SetFrequencyOverreached" = 0x15,
    OVERLOAD: "Overload" = 0x16,
    OUTPUT_DEVIATION: "OutputDeviation" = 0x17,
    ALARM: "Alarm" = 0x18,
    SET_FREQUENCY_REACHED: "SetFrequencyReached" = 0x19,
    OVER_TORQUE: "OverTorque" = 0x1A,
    UNDER_VOLTAGE: "UnderVoltage" = 0x1C,
    TORQUE_LIMITED: "TorqueLimited" = 0x1D,
    OPERATION_TIME_OVER: "OperationTimeOver" = 0x1E,
    PLUG_IN_TIME_OVER: "PlugInTimeOver" = 0x1F,
    THERMAL_ALARM: "ThermalAlarm" = 0x20,
    BRAKE_RELEASE: "BrakeRelease" = 0x26,
    BRAKE_ERROR: "BrakeError" = 0x27,
    ZERO_HZ_DETECTION: "ZeroHzDetection" = 0x28,
    SPEED_DEVIATION_MAXIMUM: "SpeedDeviationMaximum" = 0x29,
    POSITIONING_COMPLETED: "PositioningCompleted" = 0x2A,
    SET_FREQUENCY_OVERREACHED_2: "SetFrequencyOverreached2" = 0x2B,
    SET_FREQUENCY_REACHED_2: "SetFrequencyReached2" = 0x2C,
    OVERLOAD_2: "Overload2" = 0x2D,
    ANALOG_VOLTAGE_IO_DISCONNECTED: "AnalogVoltageIODisconnected" = 0x2E,
    ANALOG_CURRENT_IO_DISCONNECTED: "AnalogCurrentIODisconnected" = 0x2F,
    PID_FEEDBACK_COMPARISON: "PIDFeedbackComparison" = 0x32,
    COMMUNICATION_TRAIN_DISCONNECTION: "CommunicationTrainDisconnection" = 0x33,
    LOGICAL_OPERATION_RESULT_1: "LogicalOperationResult1" = 0x34,
    LOGICAL_OPERATION_RESULT_2: "LogicalOperationResult2" = 0x35,
    LOGICAL_OPERATION_RESULT_3: "LogicalOperationResult3" = 0x36,
    CAPACITOR_LIFE_WARNING: "CapacitorLifeWarning" = 0x3A,
    COOLING_FAN_SPEED_DROP: "CoolingFanSpeedDrop" = 0x3B,
    STARTING_CONTACT_SIGNAL: "StartingContactSignal" = 0x3C,
    HEAT_SINK_OVERHEAT_WARNING: "HeatSinkOverheatWarning" = 0x3D,
    LOW_CURRENT_INDICATOR: "LowCurrentIndicator" = 0x3E,
    GENERAL_OUTPUT_1: "GeneralOutput1" = 0x3F,
    GENERAL_OUTPUT_2: "GeneralOutput2" = 0x40,
    GENERAL_OUTPUT_3: "GeneralOutput3" = 0x41,
    INVERTER_READY_OUTPUT: "InverterReadyOutput" = 0x45,
    FORWARD_ROTATION: "ForwardRotation" = 0x46,
    REVERSE_ROTATION: "ReverseRotation" = 0x47,
    MAJOR_FAILURE: "MajorFailure" = 0x48,
    DATA_WRITING_IN_PROGRESS: "DataWritingInProgress" = 0x49,
    CRC_ERROR: "CRCError" = 0x4A,
    OVERRUN: "Overrun" = 0x4B,
    FRAMING_ERROR: "FramingError" = 0x4C,
    PARITY_ERROR: "ParityError" = 0x4D,
    SUM_CHECK_ERROR: "SumCheckError" = 0x4E,
    WINDOW_COMPARATOR_VOLTAGE: "WindowComparatorVoltage" = 0x50,
    WINDOW_COMPARATOR_CURRENT: "WindowComparatorCurrent" = 0x51,
    OPTION_DISCONNECTION: "OptionDisconnection" = 0x53,
    FREQUENCY_COMMAND_SOURCE: "FrequencyCommandSource" = 0x54,
    RUN_COMMAND_SOURCE: "RunCommandSource" = 0x55,
    SECOND_MOTOR_SELECTED: "SecondMotorSelected" = 0x56,
    GATE_SUPPRESS_MONITOR: "GateSuppressMonitor" = 0x58,
}

register_namespace! {
    /// Modbus-only registers, not reachable from the keypad
    /// (datasheet section B-4, pp. 318 and 320).
    pub mod modbus : "modbus" {
        INVERTER_STATUS_A: "InverterStatusA" = (0x0003, 1),
        INVERTER_STATUS_B: "InverterStatusB" = (0x0004, 1),
        INVERTER_STATUS_C: "InverterStatusC" = (0x0005, 1),
        PID_FEEDBACK: "PIDFeedback" = (0x0006, 1),
        WRITE_TO_EEPROM: "WriteToEEPROM" = (0x0900, 1),
        EEPROM_WRITE_MODE: "EEPROMWriteMode" = (0x0902, 1),
    }
}

register_namespace! {
    /// Monitoring functions, D group
    /// (datasheet sections 3-3 and B-4, pp. 319-320 and 322-323).
    pub mod monitoring : "monitoring" {
        FAULT_FREQUENCY_MONITOR: "FaultFrequencyMonitor" = (0x0011, 1),
        FAULT_MONITOR_1_FACTOR: "FaultMonitor1Factor" = (0x0012, 1),
        FAULT_MONITOR_1_INVERTER_STATUS: "FaultMonitor1InverterStatus" = (0x0013, 1),
        FAULT_MONITOR_1_FREQUENCY: "FaultMonitor1Frequency" = (0x0014, 2),
        FAULT_MONITOR_1_CURRENT: "FaultMonitor1Current" = (0x0016, 1),
        FAULT_MONITOR_1_VOLTAGE: "FaultMonitor1Voltage" = (0x0017, 1),
        FAULT_MONITOR_1_RUNNING_TIME: "FaultMonitor1RunningTime" = (0x0018, 2),
        FAULT_MONITOR_1_POWER_ON_TIME: "FaultMonitor1PowerOnTime" = (0x001A, 2),
        FAULT_MONITOR_2_FACTOR: "FaultMonitor2Factor" = (0x001C, 1),
        FAULT_MONITOR_2_INVERTER_STATUS: "FaultMonitor2InverterStatus" = (0x001D, 1),
        FAULT_MONITOR_2_FREQUENCY: "FaultMonitor2Frequency" = (0x001E, 2),
        FAULT_MONITOR_2_CURRENT: "FaultMonitor2Current" = (0x0020, 1),
        FAULT_MONITOR_2_VOLTAGE: "FaultMonitor2Voltage" = (0x0021, 1),
        FAULT_MONITOR_2_RUNNING_TIME: "FaultMonitor2RunningTime" = (0x0022, 2),
        FAULT_MONITOR_2_POWER_ON_TIME: "FaultMonitor2PowerOnTime" = (0x0024, 2),
        FAULT_MONITOR_3_FACTOR: "FaultMonitor3Factor" = (0x0026, 1),
        FAULT_MONITOR_3_INVERTER_STATUS: "FaultMonitor3InverterStatus" = (0x0027, 1),
        FAULT_MONITOR_3_FREQUENCY: "FaultMonitor3Frequency" = (0x0028, 2),
        FAULT_MONITOR_3_CURRENT: "FaultMonitor3Current" = (0x002A, 1),
        FAULT_MONITOR_3_VOLTAGE: "FaultMonitor3Voltage" = (0x002B, 1),
        FAULT_MONITOR_3_RUNNING_TIME: "FaultMonitor3RunningTime" = (0x002C, 2),
        FAULT_MONITOR_3_POWER_ON_TIME: "FaultMonitor3PowerOnTime" = (0x002E, 2),
        FAULT_MONITOR_4_FACTOR: "FaultMonitor4Factor" = (0x0030, 1),
        FAULT_MONITOR_4_INVERTER_STATUS: "FaultMonitor4InverterStatus" = (0x0031, 1),
        FAULT_MONITOR_4_FREQUENCY: "FaultMonitor4Frequency" = (0x0032, 2),
        FAULT_MONITOR_4_CURRENT: "FaultMonitor4Current" = (0x0034, 1),
        FAULT_MONITOR_4_VOLTAGE: "FaultMonitor4Voltage" = (0x0035, 1),
        FAULT_MONITOR_4_RUNNING_TIME: "FaultMonitor4RunningTime" = (0x0036, 2),
        FAULT_MONITOR_4_POWER_ON_TIME: "FaultMonitor4PowerOnTime" = (0x0038, 2),
        FAULT_MONITOR_5_FACTOR: "FaultMonitor5Factor" = (0x003A, 1),
        FAULT_MONITOR_5_INVERTER_STATUS: "FaultMonitor5InverterStatus" = (0x003B, 1),
        FAULT_MONITOR_5_FREQUENCY: "FaultMonitor5Frequency" = (0x003C, 2),
        FAULT_MONITOR_5_CURRENT: "FaultMonitor5Current" = (0x003E, 1),
        FAULT_MONITOR_5_VOLTAGE: "FaultMonitor5Voltage" = (0x003F, 1),
        FAULT_MONITOR_5_RUNNING_TIME: "FaultMonitor5RunningTime" = (0x0040, 2),
        FAULT_MONITOR_5_POWER_ON_TIME: "FaultMonitor5PowerOnTime" = (0x0042, 2),
        FAULT_MONITOR_6_FACTOR: "FaultMonitor6Factor" = (0x0044, 1),
        FAULT_MONITOR_6_INVERTER_STATUS: "FaultMonitor6InverterStatus" = (0x0045, 1),
        FAULT_MONITOR_6_FREQUENCY: "FaultMonitor6Frequency" = (0x0046, 2),
        FAULT_MONITOR_6_CURRENT: "FaultMonitor6Current" = (0x0048, 1),
        FAULT_MONITOR_6_VOLTAGE: "FaultMonitor6Voltage" = (0x0049, 1),
        FAULT_MONITOR_6_RUNNING_TIME: "FaultMonitor6RunningTime" = (0x004A, 2),
        FAULT_MONITOR_6_POWER_ON_TIME: "FaultMonitor6PowerOnTime" = (0x004C, 2),
        WARNING_MONITOR: "WarningMonitor" = (0x004E, 1),
        OUTPUT_FREQUENCY: "OutputFrequency" = (0x1001, 2),
        OUTPUT_CURRENT: "OutputCurrent" = (0x1003, 1),
        ROTATION_DIRECTION: "RotationDirection" = (0x1004, 1),
        PID_FEEDBACK_VALUE: "PIDFeedbackValue" = (0x1005, 2),
        MULTI_FUNCTION_INPUTS: "MultiFunctionInputs" = (0x1007, 1),
        MULTI_FUNCTION_OUTPUTS: "MultiFunctionOutputs" = (0x1008, 1),
        CONVERTED_OUTPUT_FREQUENCY: "ConvertedOutputFrequency" = (0x1009, 2),
        REAL_FREQUENCY: "RealFrequency" = (0x100B, 2),
        TORQUE_REFERENCE: "TorqueReference" = (0x100D, 1),
        TORQUE_BIAS: "TorqueBias" = (0x100E, 1),
        OUTPUT_TORQUE: "OutputTorque" = (0x1010, 1),
        OUTPUT_VOLTAGE: "OutputVoltage" = (0x1011, 1),
        INPUT_POWER: "InputPower" = (0x1012, 1),
        WATT_HOUR: "WattHour" = (0x1013, 2),
        TOTAL_RUN_TIME: "TotalRunTime" = (0x1015, 2),
        POWER_ON_TIME: "PowerOnTime" = (0x1017, 2),
        FIN_TEMPERATURE: "FinTemperature" = (0x1019, 1),
        LIFE_ASSESSMENT: "LifeAssessment" = (0x101D, 1),
        PROGRAM_COUNTER: "ProgramCounter" = (0x101E, 1),
        PROGRAM_NUMBER: "ProgramNumber" = (0x101F, 1),
        DC_VOLTAGE: "DCVoltage" = (0x1026, 1),
        REGENERATIVE_BRAKING_LOAD_RATE: "RegenerativeBrakingLoadRate" = (0x1027, 1),
        ELECTRONIC_THERMAL_MONITOR: "ElectronicThermalMonitor" = (0x1028, 1),
        DRIVE_PROGRAMMING_0: "DriveProgramming0" = (0x102E, 2),
        DRIVE_PROGRAMMING_1: "DriveProgramming1" = (0x1030, 2),
        DRIVE_PROGRAMMING_2: "DriveProgramming2" = (0x1032, 2),
        POSITION_COMMAND: "PositionCommand" = (0x1036, 2),
        CURRENT_POSITION: "CurrentPosition" = (0x1038, 2),
        INVERTER_MODE: "InverterMode" = (0x1057, 1),
        FREQUENCY_SOURCE: "FrequencySource" = (0x1059, 1),
        RUN_SOURCE: "RunSource" = (0x105A, 1),
        ANALOG_INPUT_O: "AnalogInputO" = (0x10A1, 1),
        ANALOG_INPUT_OI: "AnalogInputOI" = (0x10A2, 1),
        PULSE_TRAIN_INPUT: "PulseTrainInput" = (0x10A4, 1),
        PID_DEVIATION: "PIDDeviation" = (0x10A6, 1),
        PID_OUTPUT: "PIDOutput" = (0x10A8, 1),
    }
}

register_namespace! {
    /// Main profile parameters, F group
    /// (datasheet sections 3-4 and B-4, pp. 319-320, 322-323 and 344).
    pub mod main_profile : "main_profile" {
        OUTPUT_FREQUENCY: "OutputFrequency" = (0x0001, 2),
        ACCELERATION_TIME_1: "AccelerationTime1" = (0x1103, 2),
        DECELERATION_TIME_1: "DecelerationTime1" = (0x1105, 2),
        OPERATOR_ROTATION_DIRECTION: "OperatorRotationDirection" = (0x1107, 1),
        SECOND_ACCELERATION_TIME_1: "SecondAccelerationTime1" = (0x2103, 2),
        SECOND_DECELERATION_TIME_1: "SecondDecelerationTime1" = (0x2105, 2),
    }
}

register_namespace! {
    /// Standard functions, A group
    /// (datasheet sections 3-5 and B-4, pp. 324-327).
    pub mod standard : "standard" {
        FREQUENCY_REFERENCE_SELECTION: "FrequencyReferenceSelection" = (0x1201, 1),
        RUN_COMMAND_SELECTION: "RunCommandSelection" = (0x1202, 1),
        BASE_FREQUENCY: "BaseFrequency" = (0x1203, 1),
        MAXIMUM_FREQUENCY: "MaximumFrequency" = (0x1204, 1),
        IO_VOLTAGE_CURRENT_SELECTION: "IOVoltageCurrentSelection" = (0x1205, 1),
        VOLTAGE_START_FREQUENCY: "VoltageStartFrequency" = (0x120B, 2),
        VOLTAGE_END_FREQUENCY: "VoltageEndFrequency" = (0x120D, 2),
        VOLTAGE_START_RATIO: "VoltageStartRatio" = (0x120F, 1),
        VOLTAGE_END_RATIO: "VoltageEndRatio" = (0x1210, 1),
        VOLTAGE_START_SELECTION: "VoltageStartSelection" = (0x1211, 1),
        EXTERNAL_FREQUENCY_FILTER_TIME_CONSTANT: "ExternalFrequencyFilterTimeConstant" = (0x1212, 1),
        DRIVE_PROGRAMMING: "DriveProgramming" = (0x1213, 1),
        MULTI_STEP_SPEED_SELECTION: "MultiStepSpeedSelection" = (0x1215, 1),
        MULTI_STEP_SPEED_REFERENCE_0: "MultiStepSpeedReference0" = (0x1216, 2),
        MULTI_STEP_SPEED_REFERENCE_1: "MultiStepSpeedReference1" = (0x1218, 2),
        MULTI_STEP_SPEED_REFERENCE_2: "MultiStepSpeedReference2" = (0x121A, 2),
        MULTI_STEP_SPEED_REFERENCE_3: "MultiStepSpeedReference3" = (0x121C, 2),
        MULTI_STEP_SPEED_REFERENCE_4: "MultiStepSpeedReference4" = (0x121E, 2),
        MULTI_STEP_SPEED_REFERENCE_5: "MultiStepSpeedReference5" = (0x1220, 2),
        MULTI_STEP_SPEED_REFERENCE_6: "MultiStepSpeedReference6" = (0x1222, 2),
        MULTI_STEP_SPEED_REFERENCE_7: "MultiStepSpeedReference7" = (0x1224, 2),
        MULTI_STEP_SPEED_REFERENCE_8: "MultiStepSpeedReference8" = (0x1226, 2),
        MULTI_STEP_SPEED_REFERENCE_9: "MultiStepSpeedReference9" = (0x1228, 2),
        MULTI_STEP_SPEED_REFERENCE_10: "MultiStepSpeedReference10" = (0x122A, 2),
        MULTI_STEP_SPEED_REFERENCE_11: "MultiStepSpeedReference11" = (0x122C, 2),
        MULTI_STEP_SPEED_REFERENCE_12: "MultiStepSpeedReference12" = (0x122E, 2),
        MULTI_STEP_SPEED_REFERENCE_13: "MultiStepSpeedReference13" = (0x1230, 2),
        MULTI_STEP_SPEED_REFERENCE_14: "MultiStepSpeedReference14" = (0x1232, 2),
        MULTI_STEP_SPEED_REFERENCE_15: "MultiStepSpeedReference15" = (0x1234, 2),
        JOGGING_FREQUENCY: "JoggingFrequency" = (0x1238, 1),
        JOGGING_STOP_SELECTION: "JoggingStopSelection" = (0x1239, 1),
        TORQUE_BOOST_SELECTION: "TorqueBoostSelection" = (0x123B, 1),
        MANUAL_TORQUE_BOOST_VOLTAGE: "ManualTorqueBoostVoltage" = (0x123C, 1),
        MANUAL_TORQUE_BOOST_FREQUENCY: "ManualTorqueBoostFrequency" = (0x123D, 1),
        VF_CHARACTERISTICS_SELECTION: "VFCharacteristicsSelection" = (0x123E, 1),
        OUTPUT_VOLTAGE_GAIN: "OutputVoltageGain" = (0x123F, 1),
        AUTOMATIC_TORQUE_BOOST_VOLTAGE_COMPENSATION_GAIN: "AutomaticTorqueBoostVoltageCompensationGain" = (0x1240, 1),
        AUTOMATIC_TORQUE_BOOST_SLIP_COMPENSATION_GAIN: "AutomaticTorqueBoostSlipCompensationGain" = (0x1241, 1),
        DC_INJECTION_BRAKING_ENABLE: "DCInjectionBrakingEnable" = (0x1245, 1),
        DC_INJECTION_BRAKING_FREQUENCY: "DCInjectionBrakingFrequency" = (0x1246, 1),
        DC_INJECTION_BRAKING_DELAY_TIME: "DCInjectionBrakingDelayTime" = (0x1247, 1),
        DC_INJECTION_BRAKING_POWER: "DCInjectionBrakingPower" = (0x1248, 1),
        DC_INJECTION_BRAKING_TIME: "DCInjectionBrakingTime" = (0x1249, 1),
        DC_INJECTION_BRAKING_METHOD_SELECTION: "DCInjectionBrakingMethodSelection" = (0x124A, 1),
        STARTUP_DC_INJECTION_BRAKING_POWER: "StartupDCInjectionBrakingPower" = (0x124B, 1),
        STARTUP_DC_INJECTION_BRAKING_TIME: "StartupDCInjectionBrakingTime" = (0x124C, 1),
        DC_INJECTION_BRAKING_CARRIER_FREQUENCY: "DCInjectionBrakingCarrierFrequency" = (0x124D, 1),
        FREQUENCY_UPPER_LIMIT: "FrequencyUpperLimit" = (0x124F, 2),
        FREQUENCY_LOWER_LIMIT: "FrequencyLowerLimit" = (0x1251, 2),
        JUMP_FREQUENCY_1: "JumpFrequency1" = (0x1253, 2),
        JUMP_FREQUENCY_WIDTH_1: "JumpFrequencyWidth1" = (0x1255, 1),
        JUMP_FREQUENCY_2: "JumpFrequency2" = (0x1256, 2),
        JUMP_FREQUENCY_WIDTH_2: "JumpFrequencyWidth2" = (0x1258, 1),
        JUMP_FREQUENCY_3: "JumpFrequency3" = (0x1259, 2),
        JUMP_FREQUENCY_WIDTH_3: "JumpFrequencyWidth3" = (0x125B, 1),
        ACCELERATION_STOP_FREQUENCY: "AccelerationStopFrequency" = (0x125C, 2),
        ACCELERATION_STOP_TIME: "AccelerationStopTime" = (0x125E, 1),
        PID_SELECTION: "PIDSelection" = (0x125F, 1),
        PID_P_GAIN: "PIDPGain" = (0x1260, 1),
        PID_I_GAIN: "PIDIGain" = (0x1261, 1),
        PID_D_GAIN: "PIDDGain" = (0x1262, 1),
        PID_SCALE: "PIDScale" = (0x1263, 1),
        PID_FEEDBACK_SELECTION: "PIDFeedbackSelection" = (0x1264, 1),
        REVERSE_PID_FUNCTION: "ReversePIDFunction" = (0x1265, 1),
        PID_OUTPUT_LIMIT_FUNCTION: "PIDOutputLimitFunction" = (0x1266, 1),
        PID_FEED_FORWARD_SELECTION: "PIDFeedForwardSelection" = (0x1267, 1),
        AVR_SELECTION: "AVRSelection" = (0x1269, 1),
        AVR_VOLTAGE_SELECTION: "AVRVoltageSelection" = (0x126A, 1),
        AVR_FILTER_TIME_CONSTANT: "AVRFilterTimeConstant" = (0x126B, 1),
        AVR_DECELERATION_GAIN: "AVRDecelerationGain" = (0x126C, 1),
        ENERGY_SAVING_OPERATION_MODE: "EnergySavingOperationMode" = (0x126D, 1),
        ENERGY_SAVING_RESPONSE_ACCURACY_ADJUSTMENT: "EnergySavingResponseAccuracyAdjustment" = (0x126E, 1),
        ACCELERATION_TIME_2: "AccelerationTime2" = (0x1274, 2),
        DECELERATION_TIME_2: "DecelerationTime2" = (0x1276, 2),
        METHOD_TO_SWITCH_TO_ACC2_DEC2: "MethodToSwitchToAcc2Dec2" = (0x1278, 1),
        ACC1_TO_ACC2_FREQUENCY_TRANSITION_POINT: "Acc1ToAcc2FrequencyTransitionPoint" = (0x1279, 2),
        DEC1_TO_DEC2_FREQUENCY_TRANSITION_POINT: "Dec1ToDec2FrequencyTransitionPoint" = (0x127B, 2),
        ACCELERATION_CURVE_SELECTION: "AccelerationCurveSelection" = (0x127D, 1),
        DECELERATION_CURVE_SELECTION: "DecelerationCurveSelection" = (0x127E, 1),
    }
}

/// Base address of the factor register for fault monitor banks 1-6
/// (D081-D086).
pub static FAULT_MONITOR_BANKS: [u16; 6] = [0x0012, 0x001C, 0x0026, 0x0030, 0x003A, 0x0044];

/// Fields recorded for each fault monitor bank, as offsets from the bank's
/// factor register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultMonitorField {
    Factor,
    InverterStatus,
    Frequency,
    Current,
    Voltage,
    RunningTime,
    PowerOnTime,
}

impl FaultMonitorField {
    /// Word offset of this field from the bank base.
    pub fn offset(self) -> u16 {
        match self {
            Self::Factor => 0,
            Self::InverterStatus => 1,
            Self::Frequency => 2,
            Self::Current => 4,
            Self::Voltage => 5,
            Self::RunningTime => 6,
            Self::PowerOnTime => 8,
        }
    }
}

/// Codes identifying the reason of a trip event
/// (datasheet section B-4, p. 421).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TripFactor {
    NoFactor = 0,
    OverCurrentAtConstantSpeed = 1,
    OverCurrentDuringDeceleration = 2,
    OverCurrentDuringAcceleration = 3,
    OverCurrentInOtherCondition = 4,
    OverloadProtection = 5,
    BrakingResistorOverloadProtection = 6,
    OvervoltageProtection = 7,
    EepromError = 8,
    UndervoltageProtection = 9,
    CurrentDetectionError = 10,
    CpuError = 11,
    ExternalTrip = 12,
    UspError = 13,
    GroundFaultProtection = 14,
    InputOvervoltageProtection = 15,
    InverterThermalTrip = 21,
    CpuErrorAlt = 22,
    MainCircuitError = 25,
    DriverError = 30,
    ThermistorError = 35,
    BrakingError = 36,
    SafeStop = 37,
    LowSpeedOverloadProtection = 38,
    OperatorConnection = 40,
    ModbusCommunicationError = 41,
    InvalidInstruction = 43,
    InvalidNestingCount = 44,
    EasySequenceExecutionError = 45,
    EasySequenceUserTrip0 = 50,
    EasySequenceUserTrip1 = 51,
    EasySequenceUserTrip2 = 52,
    EasySequenceUserTrip3 = 53,
    EasySequenceUserTrip4 = 54,
    EasySequenceUserTrip5 = 55,
    EasySequenceUserTrip6 = 56,
    EasySequenceUserTrip7 = 57,
    EasySequenceUserTrip8 = 58,
    EasySequenceUserTrip9 = 59,
    OptionError0 = 60,
    OptionError1 = 61,
    OptionError2 = 62,
    OptionError3 = 63,
    OptionError4 = 64,
    OptionError5 = 65,
    OptionError6 = 66,
    OptionError7 = 67,
    OptionError8 = 68,
    OptionError9 = 69,
    EncoderDisconnection = 80,
    ExcessiveSpeed = 81,
    PositionControlRangeTrip = 83,
}

impl TripFactor {
    /// Raw code as stored in a fault monitor factor register.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Codes identifying the status of the inverter
/// (datasheet section B-4, p. 421).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum InverterStatus {
    Resetting = 0,
    Stopping = 1,
    Decelerating = 2,
    ConstantSpeedOperation = 3,
    Accelerating = 4,
    OperatingAtZeroFrequency = 5,
    Starting = 6,
    DcBreaking = 7,
    OverloadRestricted = 8,
}

impl InverterStatus {
    /// Decode the status word of a fault monitor bank.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Resetting),
            1 => Some(Self::Stopping),
            2 => Some(Self::Decelerating),
            3 => Some(Self::ConstantSpeedOperation),
            4 => Some(Self::Accelerating),
            5 => Some(Self::OperatingAtZeroFrequency),
            6 => Some(Self::Starting),
            7 => Some(Self::DcBreaking),
            8 => Some(Self::OverloadRestricted),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Coil;

    #[test]
    fn coil_table_is_address_ordered() {
        let addrs: Vec<u8> = Coil::all().map(|c| c.address()).collect();
        let mut sorted = addrs.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(addrs, sorted);
        assert_eq!(addrs.first().copied(), Some(0x01));
        assert_eq!(addrs.last().copied(), Some(0x58));
    }

    #[test]
    fn fault_monitor_banks_resolve_in_monitoring_namespace() {
        // Every bank/field pair from the datasheet must land on a declared
        // register, and the two-word fields on a two-word register.
        for base in FAULT_MONITOR_BANKS {
            for field in [
                FaultMonitorField::Factor,
                FaultMonitorField::InverterStatus,
                FaultMonitorField::Frequency,
                FaultMonitorField::Current,
                FaultMonitorField::Voltage,
                FaultMonitorField::RunningTime,
                FaultMonitorField::PowerOnTime,
            ] {
                let reg = monitoring::NAMESPACE
                    .contains(base + field.offset())
                    .unwrap_or_else(|| panic!("missing 0x{:04X}", base + field.offset()));
                let expect_wide = matches!(
                    field,
                    FaultMonitorField::Frequency
                        | FaultMonitorField::RunningTime
                        | FaultMonitorField::PowerOnTime
                );
                assert_eq!(reg.words() == 2, expect_wide, "{reg:?}");
            }
        }
    }

    #[test]
    fn trip_factor_codes() {
        assert_eq!(TripFactor::NoFactor.code(), 0);
        assert_eq!(TripFactor::EepromError.code(), 8);
        assert_eq!(TripFactor::PositionControlRangeTrip.code(), 83);
    }

    #[test]
    fn inverter_status_decoding() {
        assert_eq!(InverterStatus::from_code(3), Some(InverterStatus::ConstantSpeedOperation));
        assert_eq!(InverterStatus::from_code(8), Some(InverterStatus::OverloadRestricted));
        assert_eq!(InverterStatus::from_code(9), None);
    }

    #[test]
    fn eeprom_commit_registers_exist() {
        assert_eq!(modbus::WRITE_TO_EEPROM.address(), 0x0900);
        assert_eq!(coils::DATA_WRITING_IN_PROGRESS.address(), 0x49);
        assert_eq!(monitoring::FAULT_MONITOR_1_FACTOR.address(), 0x0012);
    }
}
